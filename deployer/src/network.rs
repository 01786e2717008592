//! Network identification.
//!
//! Wallet providers report the active network in whatever shape their
//! transport happens to produce: a JSON number, a decimal string, a
//! `0x`-prefixed quantity, or a 256-bit integer. [`NetworkId`] accepts all of
//! them and normalizes to a plain `u64` chain id before the id is matched
//! against [`KNOWN_NETWORKS`].

use std::fmt;

use alloy::primitives::U256;
use serde::Deserialize;

/// Name reported for chain ids that are not in [`KNOWN_NETWORKS`].
pub const UNKNOWN_NETWORK: &str = "Unknown";

/// Chain ids with a human-readable name.
pub const KNOWN_NETWORKS: &[(u64, &str)] = &[
    (1, "Ethereum Mainnet"),
    (11_155_111, "Ethereum Sepolia"),
    (5, "Ethereum Goerli"),
    (42, "Ethereum Kovan"),
    (42_161, "Arbitrum One"),
    (10, "Optimism Mainnet"),
];

/// A network identifier as reported by a wallet provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NetworkId {
    /// A numeric id.
    Number(u64),
    /// A textual id, either decimal or `0x`-prefixed hex.
    Text(String),
    /// A big-integer id.
    Big(U256),
}

impl NetworkId {
    /// Normalizes the identifier into a `u64` chain id.
    ///
    /// Returns `None` when the identifier is not a number or does not fit
    /// into 64 bits.
    #[must_use]
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Big(id) => u64::try_from(*id).ok(),
            Self::Text(text) => parse_chain_id(text),
        }
    }

    /// Resolves the human-readable network name.
    ///
    /// Identifiers that cannot be normalized resolve to [`UNKNOWN_NETWORK`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.chain_id().map_or(UNKNOWN_NETWORK, network_name)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<U256> for NetworkId {
    fn from(id: U256) -> Self {
        Self::Big(id)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
            Self::Big(id) => write!(f, "{id}"),
        }
    }
}

/// Returns the name of the network with `chain_id`.
#[must_use]
pub fn network_name(chain_id: u64) -> &'static str {
    KNOWN_NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map_or(UNKNOWN_NETWORK, |&(_, name)| name)
}

fn parse_chain_id(text: &str) -> Option<u64> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn resolves_every_known_network() {
        assert_eq!(network_name(1), "Ethereum Mainnet");
        assert_eq!(network_name(11_155_111), "Ethereum Sepolia");
        assert_eq!(network_name(5), "Ethereum Goerli");
        assert_eq!(network_name(42), "Ethereum Kovan");
        assert_eq!(network_name(42_161), "Arbitrum One");
        assert_eq!(network_name(10), "Optimism Mainnet");
    }

    #[test]
    fn unlisted_chain_is_unknown() {
        assert_eq!(network_name(31_337), UNKNOWN_NETWORK);
        assert_eq!(network_name(0), UNKNOWN_NETWORK);
    }

    #[test]
    fn normalizes_all_id_shapes() {
        let ids = [
            NetworkId::from(11_155_111u64),
            NetworkId::from("11155111"),
            NetworkId::from("0xaa36a7"),
            NetworkId::from(" 0XAA36A7 "),
            NetworkId::from(U256::from(11_155_111u64)),
        ];

        for id in ids {
            assert_eq!(id.chain_id(), Some(11_155_111), "id: {id}");
            assert_eq!(id.name(), "Ethereum Sepolia");
        }
    }

    #[test]
    fn garbage_ids_are_unknown() {
        assert_eq!(NetworkId::from("mainnet").chain_id(), None);
        assert_eq!(NetworkId::from("0x").name(), UNKNOWN_NETWORK);
        assert_eq!(NetworkId::from(U256::MAX).name(), UNKNOWN_NETWORK);
    }

    #[test]
    fn deserializes_from_json() -> serde_json::Result<()> {
        let number: NetworkId = serde_json::from_str("42161")?;
        let text: NetworkId = serde_json::from_str("\"0xa\"")?;

        assert_eq!(number.name(), "Arbitrum One");
        assert_eq!(text.name(), "Optimism Mainnet");
        Ok(())
    }

    proptest! {
        #[test]
        fn id_shape_does_not_change_name(chain_id: u64) {
            let expected = network_name(chain_id);

            prop_assert_eq!(NetworkId::from(chain_id).name(), expected);
            prop_assert_eq!(NetworkId::from(chain_id.to_string()).name(), expected);
            prop_assert_eq!(NetworkId::from(format!("{chain_id:#x}")).name(), expected);
            prop_assert_eq!(NetworkId::from(U256::from(chain_id)).name(), expected);
        }
    }
}
