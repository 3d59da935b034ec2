use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which Hedera network a client is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
    Previewnet,
    Custom,
}

/// The endpoints and pooling bounds a client is configured with.
///
/// This type only describes configuration — it does not read environment
/// variables or resolve DNS names itself; that's left to the caller.
/// Consensus- and block-node addresses are operational data this crate
/// does not hardcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: Network,
    pub block_node_endpoints: Vec<String>,
    pub consensus_node_endpoints: Vec<String>,
    pub max_pool_connections: usize,
    pub max_idle: Duration,
}

impl NetworkConfig {
    /// An empty-endpoint skeleton for `network`; the caller populates
    /// `block_node_endpoints`/`consensus_node_endpoints` themselves.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            block_node_endpoints: Vec::new(),
            consensus_node_endpoints: Vec::new(),
            max_pool_connections: 10,
            max_idle: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_network_starts_with_empty_endpoints() {
        let config = NetworkConfig::for_network(Network::Mainnet);
        assert!(config.block_node_endpoints.is_empty());
        assert!(config.consensus_node_endpoints.is_empty());
        assert_eq!(config.network, Network::Mainnet);
    }
}
