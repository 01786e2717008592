//! Wallet provider seam.
//!
//! A [`WalletProvider`] is the only way this crate talks to a chain: it
//! authorizes accounts, reports the active network and broadcasts
//! contract-creation transactions. [`RpcWallet`] is the production
//! implementation; tests use the generated `MockWalletProvider`.

use alloy::primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use thiserror::Error;

use crate::network::NetworkId;

mod rpc;

pub use rpc::RpcWallet;

/// Errors reported by a [`WalletProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not reach the node or the node rejected the
    /// request.
    #[error("transport error: {0}")]
    Transport(String),
    /// The transaction was mined but its execution reverted.
    #[error("transaction {tx_hash} reverted")]
    Reverted {
        /// Hash of the reverted transaction.
        tx_hash: TxHash,
    },
    /// The receipt of a contract-creation transaction carries no contract
    /// address.
    #[error("receipt of {tx_hash} has no contract address")]
    MissingContractAddress {
        /// Hash of the transaction.
        tx_hash: TxHash,
    },
    /// The provider does not support the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Receipt of a successful contract deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployReceipt {
    /// Hash of the contract-creation transaction.
    pub transaction_hash: TxHash,
    /// Address of the deployed contract.
    pub contract_address: Address,
}

/// A wallet through which accounts are authorized and transactions are
/// signed.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks the wallet to authorize its accounts for this application.
    ///
    /// # Errors
    ///
    /// * [`ProviderError::Transport`] - If the wallet refused or could not be
    ///   reached.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Returns the accounts already authorized, without prompting.
    ///
    /// # Errors
    ///
    /// * [`ProviderError::Transport`] - If the wallet could not be reached.
    async fn accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Returns the identifier of the network the wallet is connected to.
    ///
    /// # Errors
    ///
    /// * [`ProviderError::Transport`] - If the wallet could not be reached.
    async fn network_id(&self) -> Result<NetworkId, ProviderError>;

    /// Signs and broadcasts a contract-creation transaction with creation
    /// `code` from `from`, and waits for its receipt.
    ///
    /// Resolves exactly once: either with the receipt or with an error.
    ///
    /// # Errors
    ///
    /// * [`ProviderError::Transport`] - If submission or receipt retrieval
    ///   failed.
    /// * [`ProviderError::Reverted`] - If the deployment reverted.
    /// * [`ProviderError::MissingContractAddress`] - If the receipt carries no
    ///   contract address.
    async fn send_deployment(
        &self,
        from: Address,
        code: Bytes,
    ) -> Result<DeployReceipt, ProviderError>;
}
