//! Wallet session.
//!
//! A session exists only between a successful [`connect`] and the next
//! [`WalletSession::disconnect`]. Wallets expose no programmatic disconnect,
//! so disconnecting only forgets the session locally.

use alloy::primitives::Address;
use thiserror::Error;
use tracing::{info, warn};

use crate::provider::{ProviderError, WalletProvider};

/// Reasons a wallet connection fails.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// No wallet provider is available.
    #[error("Please install a wallet provider (e.g. MetaMask)!")]
    ProviderNotFound,
    /// The wallet authorized no account.
    #[error("the wallet did not authorize any account")]
    NoAccounts,
    /// The wallet failed to answer.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// State of the wallet connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSession {
    /// Whether a wallet is connected.
    pub connected: bool,
    /// The active account.
    pub account: Option<Address>,
    /// Normalized chain id of the active network, when it could be read.
    pub chain_id: Option<u64>,
    /// Human-readable name of the active network.
    pub network_name: String,
}

impl WalletSession {
    /// Forgets the session, returning to the initial empty state.
    pub fn disconnect(&mut self) {
        if let Some(account) = self.account {
            info!(%account, "wallet disconnected");
        }
        *self = Self::default();
    }

    /// The active account, when connected.
    #[must_use]
    pub fn active_account(&self) -> Option<Address> {
        self.account.filter(|_| self.connected)
    }
}

/// Connects to the wallet `provider`.
///
/// The first authorized account becomes the active account; the network id
/// is resolved to a name through [`crate::network::NetworkId::name`].
///
/// # Errors
///
/// * [`ConnectError::ProviderNotFound`] - If `provider` is `None`.
/// * [`ConnectError::NoAccounts`] - If the wallet authorized no account.
/// * [`ConnectError::Provider`] - If the wallet failed to answer.
pub async fn connect(
    provider: Option<&dyn WalletProvider>,
) -> Result<WalletSession, ConnectError> {
    let Some(provider) = provider else {
        warn!("no wallet provider found");
        return Err(ConnectError::ProviderNotFound);
    };

    let accounts = provider.request_accounts().await?;
    let account = *accounts.first().ok_or(ConnectError::NoAccounts)?;

    let network = provider.network_id().await?;
    let session = WalletSession {
        connected: true,
        account: Some(account),
        chain_id: network.chain_id(),
        network_name: network.name().to_owned(),
    };

    info!(
        %account,
        network = %network,
        network_name = %session.network_name,
        "wallet connected"
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Address};
    use proptest::prelude::*;

    use super::*;
    use crate::{network::NetworkId, provider::MockWalletProvider};

    const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const BOB: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    fn wallet(
        accounts: Vec<Address>,
        network: NetworkId,
    ) -> MockWalletProvider {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_request_accounts()
            .times(1)
            .returning(move || Ok(accounts.clone()));
        provider
            .expect_network_id()
            .returning(move || Ok(network.clone()));
        provider.expect_send_deployment().never();
        provider
    }

    #[tokio::test]
    async fn missing_provider_asks_for_a_wallet() {
        let err = connect(None).await.expect_err("should not connect");

        assert!(matches!(err, ConnectError::ProviderNotFound));
        assert!(err.to_string().contains("Please install a wallet"));
    }

    #[tokio::test]
    async fn first_account_and_sepolia_name() -> Result<(), ConnectError> {
        let provider = wallet(vec![ALICE, BOB], NetworkId::from(11_155_111u64));

        let session = connect(Some(&provider)).await?;

        assert!(session.connected);
        assert_eq!(session.account, Some(ALICE));
        assert_eq!(session.chain_id, Some(11_155_111));
        assert_eq!(session.network_name, "Ethereum Sepolia");
        Ok(())
    }

    #[tokio::test]
    async fn hex_network_id_is_normalized() -> Result<(), ConnectError> {
        let provider = wallet(vec![BOB], NetworkId::from("0xa4b1"));

        let session = connect(Some(&provider)).await?;

        assert_eq!(session.account, Some(BOB));
        assert_eq!(session.network_name, "Arbitrum One");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_network_still_connects() -> Result<(), ConnectError> {
        let provider = wallet(vec![ALICE], NetworkId::from("devnet"));

        let session = connect(Some(&provider)).await?;

        assert!(session.connected);
        assert_eq!(session.chain_id, None);
        assert_eq!(session.network_name, "Unknown");
        Ok(())
    }

    #[tokio::test]
    async fn empty_account_list_is_rejected() {
        let provider = wallet(vec![], NetworkId::from(1u64));

        let err = connect(Some(&provider)).await.expect_err("should fail");

        assert!(matches!(err, ConnectError::NoAccounts));
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let mut provider = MockWalletProvider::new();
        provider.expect_request_accounts().returning(|| {
            Err(ProviderError::Transport("user rejected the request".into()))
        });
        provider.expect_network_id().never();

        let err = connect(Some(&provider)).await.expect_err("should fail");

        assert!(matches!(err, ConnectError::Provider(_)));
    }

    #[test]
    fn active_account_requires_connection() {
        let session = WalletSession {
            connected: false,
            account: Some(ALICE),
            ..WalletSession::default()
        };

        assert_eq!(session.active_account(), None);
    }

    proptest! {
        #[test]
        fn disconnect_always_resets(
            connected: bool,
            account: Option<[u8; 20]>,
            chain_id: Option<u64>,
            network_name: String,
        ) {
            let mut session = WalletSession {
                connected,
                account: account.map(Address::from),
                chain_id,
                network_name,
            };

            session.disconnect();

            prop_assert_eq!(session, WalletSession::default());
        }
    }
}
