use crate::transport::Transport;

/// A pooled handle: an endpoint identity plus the transport bound to it.
///
/// Cloning a `Connection` is cheap (see [`Transport`]); the pool clones the
/// handle out to the caller on `acquire` and keeps its own copy to track
/// liveness, rather than handing out the only reference to a socket.
#[derive(Clone)]
pub struct Connection {
    pub(crate) id: u64,
    pub endpoint: String,
    transport: Transport,
}

impl Connection {
    pub(crate) fn new(id: u64, endpoint: String) -> Self {
        let transport = Transport::new(endpoint.clone());
        Self {
            id,
            endpoint,
            transport,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
