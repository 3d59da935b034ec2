use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::connection::Connection;
use crate::error::Error;

struct Entry {
    connection: Connection,
    available: bool,
    last_used: Instant,
}

/// A bounded multiset of connections keyed by endpoint.
///
/// All mutations are serialized under a single lock, matching how a
/// background-task-owned multiplexer serializes its ingress/egress queues —
/// here a blocking [`Mutex`] suffices because pool operations are O(n) over
/// a small n and the lock is never held across an `.await`.
pub struct Pool {
    entries: Mutex<HashMap<String, Vec<Entry>>>,
    max_per_endpoint: usize,
    next_id: AtomicU64,
}

impl Pool {
    pub fn new(max_per_endpoint: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_per_endpoint,
            next_id: AtomicU64::new(0),
        }
    }

    /// Returns an available connection for `endpoint`, or constructs a new
    /// one if the endpoint's total connection count is below the bound.
    pub fn acquire(&self, endpoint: &str) -> Result<Connection, Error> {
        let mut entries = self.entries.lock().unwrap();
        let slots = entries.entry(endpoint.to_string()).or_default();

        if let Some(entry) = slots.iter_mut().find(|e| e.available) {
            entry.available = false;
            return Ok(entry.connection.clone());
        }

        if slots.len() < self.max_per_endpoint {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let connection = Connection::new(id, endpoint.to_string());
            slots.push(Entry {
                connection: connection.clone(),
                available: false,
                last_used: Instant::now(),
            });
            debug!(endpoint, id, "opened new pooled connection");
            return Ok(connection);
        }

        Err(Error::ConnectionPoolExhausted(endpoint.to_string()))
    }

    /// Marks `connection` available again and stamps its idle clock.
    pub fn release(&self, connection: Connection) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(slots) = entries.get_mut(&connection.endpoint) {
            if let Some(entry) = slots.iter_mut().find(|e| e.connection.id == connection.id) {
                entry.available = true;
                entry.last_used = Instant::now();
            }
        }
    }

    /// Drops available connections idle longer than `max_idle`.
    pub fn clean_stale(&self, max_idle: Duration) {
        let mut entries = self.entries.lock().unwrap();
        let now = Instant::now();

        for slots in entries.values_mut() {
            slots.retain(|entry| !(entry.available && now.duration_since(entry.last_used) > max_idle));
        }
    }
}
