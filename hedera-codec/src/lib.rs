//! Hand-rolled binary codec for the Hedera wire protocol.
//!
//! Implements the subset of proto3 Hedera actually uses on the wire:
//! varint and zig-zag integers, length-delimited bytes/strings/nested
//! messages, and a writer that emits fields in ascending numeric order so
//! that identical logical records always produce identical bytes.
//!
//! This crate is pure and re-entrant: it never touches shared state and
//! allocates only in the [`writer::Writer`] (the [`reader::Reader`] is
//! zero-copy over its input).

pub mod error;
pub mod reader;
pub mod varint;
pub mod writer;

pub use error::Error;
pub use reader::{Field, Reader, Value, WireType};
pub use varint::{read_varint, write_varint, zigzag_decode, zigzag_encode};
pub use writer::Writer;
