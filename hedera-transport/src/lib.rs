//! gRPC-web transport and connection pooling for the Hedera network
//! protocol: DATA/TRAILER frame encoding on top of `reqwest`, and a
//! bounded, lock-serialized connection multiset keyed by endpoint.

pub mod connection;
pub mod error;
pub mod frame;
pub mod pool;
pub mod transport;

pub use connection::Connection;
pub use error::Error;
pub use frame::{encode_data_frame, parse_trailers, Frame, FrameReader};
pub use pool::Pool;
pub use transport::Transport;
