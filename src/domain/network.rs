//! Network name to aggregator chain identifier resolution.
//!
//! The gateway accepts a symbolic network name in the request path and the
//! aggregator expects a numeric chain id. [`NETWORKS`] is the single lookup
//! table both directions are derived from.
//!
//! Resolution is total: any name outside the table, including the empty
//! string, resolves to [`DEFAULT_NETWORK`] (`eth`, chain id `1`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric chain identifier understood by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Creates a `ChainId` from its raw numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Networks the gateway knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet.
    Eth,
    /// BNB Smart Chain.
    Bsc,
    /// Polygon PoS.
    Polygon,
    /// Avalanche C-Chain.
    Avalanche,
    /// OP Mainnet.
    Optimism,
    /// Arbitrum One.
    Arbitrum,
    /// Gnosis Chain.
    Gnosis,
}

/// Immutable `(network, name, chain id)` table.
pub const NETWORKS: [(Network, &str, ChainId); 7] = [
    (Network::Eth, "eth", ChainId(1)),
    (Network::Bsc, "bsc", ChainId(56)),
    (Network::Polygon, "polygon", ChainId(137)),
    (Network::Avalanche, "avalanche", ChainId(43114)),
    (Network::Optimism, "optimism", ChainId(10)),
    (Network::Arbitrum, "arbitrum", ChainId(42161)),
    (Network::Gnosis, "gnosis", ChainId(100)),
];

/// Network used when the requested name is not in [`NETWORKS`].
pub const DEFAULT_NETWORK: Network = Network::Eth;

impl Network {
    /// Looks up a network by its exact (case-sensitive) name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NETWORKS
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(network, _, _)| *network)
    }

    /// Returns the path name of this network (e.g. `"bsc"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        NETWORKS
            .iter()
            .find(|(network, _, _)| *network == self)
            .map_or("eth", |(_, n, _)| *n)
    }

    /// Returns the aggregator chain id of this network.
    #[must_use]
    pub fn chain_id(self) -> ChainId {
        NETWORKS
            .iter()
            .find(|(network, _, _)| *network == self)
            .map_or(ChainId(1), |(_, _, id)| *id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a symbolic network name to the aggregator's chain id.
///
/// Never fails: unknown names resolve to [`DEFAULT_NETWORK`].
#[must_use]
pub fn resolve_chain(name: &str) -> ChainId {
    match Network::from_name(name) {
        Some(network) => network.chain_id(),
        None => {
            tracing::warn!(
                network = name,
                fallback = %DEFAULT_NETWORK,
                "unknown network, using default"
            );
            DEFAULT_NETWORK.chain_id()
        }
    }
}
