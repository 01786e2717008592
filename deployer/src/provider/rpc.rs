use std::fmt;

use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::{http::reqwest::Url, TransportError},
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{DeployReceipt, ProviderError, WalletProvider};
use crate::{config::Config, network::NetworkId};

/// JSON-RPC error code for an unknown method.
const METHOD_NOT_FOUND: i64 = -32601;

/// A [`WalletProvider`] backed by an `alloy` HTTP provider.
///
/// With a local signer, the signer's address is the only authorized account
/// and transactions are signed in-process by a `WalletFiller`. Without one,
/// the node holds the keys: accounts come from `eth_requestAccounts` and
/// transactions go out through `eth_sendTransaction`.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
    signer: Option<PrivateKeySigner>,
    url: Url,
}

impl RpcWallet {
    /// Create a wallet talking to `url`, signing with `signer` when given.
    #[must_use]
    pub fn new(url: Url, signer: Option<PrivateKeySigner>) -> Self {
        let provider = match &signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer.clone()))
                .connect_http(url.clone())
                .erased(),
            None => ProviderBuilder::new().connect_http(url.clone()).erased(),
        };

        Self { provider, signer, url }
    }

    /// Looks for a provider in `config`.
    ///
    /// Returns `None` when no RPC endpoint is configured.
    #[must_use]
    pub fn discover(config: &Config) -> Option<Self> {
        let url = config.rpc_url()?.clone();
        Some(Self::new(url, config.signer().cloned()))
    }

    /// The rpc endpoint this wallet is connected to.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether transactions are signed in-process.
    #[must_use]
    pub fn signs_locally(&self) -> bool {
        self.signer.is_some()
    }
}

impl fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWallet")
            .field("url", &self.url.as_str())
            .field(
                "signer",
                &self.signer.as_ref().map(PrivateKeySigner::address),
            )
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        if let Some(signer) = &self.signer {
            return Ok(vec![signer.address()]);
        }

        match self
            .provider
            .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
            .await
        {
            Ok(accounts) => Ok(accounts),
            Err(e) if is_method_not_found(&e) => {
                debug!(
                    url = %self.url,
                    "eth_requestAccounts unsupported, reading eth_accounts"
                );
                self.accounts().await
            }
            Err(e) => Err(transport(&e)),
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        if let Some(signer) = &self.signer {
            return Ok(vec![signer.address()]);
        }

        self.provider.get_accounts().await.map_err(|e| transport(&e))
    }

    async fn network_id(&self) -> Result<NetworkId, ProviderError> {
        // Decoded as reported; `NetworkId` normalizes it.
        self.provider
            .raw_request::<_, NetworkId>("eth_chainId".into(), ())
            .await
            .map_err(|e| transport(&e))
    }

    async fn send_deployment(
        &self,
        from: Address,
        code: Bytes,
    ) -> Result<DeployReceipt, ProviderError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| transport(&e))?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, %from, "deployment transaction submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !ReceiptResponse::status(&receipt) {
            warn!(%tx_hash, "deployment transaction reverted");
            return Err(ProviderError::Reverted { tx_hash });
        }

        let contract_address = ReceiptResponse::contract_address(&receipt)
            .ok_or(ProviderError::MissingContractAddress { tx_hash })?;

        Ok(DeployReceipt {
            transaction_hash: ReceiptResponse::transaction_hash(&receipt),
            contract_address,
        })
    }
}

fn is_method_not_found(e: &TransportError) -> bool {
    e.as_error_resp().is_some_and(|payload| payload.code == METHOD_NOT_FOUND)
}

fn transport(e: &TransportError) -> ProviderError {
    ProviderError::Transport(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn discovers_nothing_without_rpc_url() {
        assert!(RpcWallet::discover(&Config::default()).is_none());
    }

    #[test]
    fn discovers_configured_endpoint() -> Result<(), crate::ConfigError> {
        let config = Config::default().with_rpc_url("http://localhost:8545")?;

        let wallet = RpcWallet::discover(&config).expect("should discover");
        assert_eq!(wallet.url().as_str(), "http://localhost:8545/");
        assert!(!wallet.signs_locally());
        Ok(())
    }

    #[tokio::test]
    async fn local_signer_is_the_only_account() -> eyre::Result<()> {
        let config = Config::default()
            .with_rpc_url("http://localhost:8545")?
            .with_private_key(DEV_KEY)?;
        let wallet = RpcWallet::discover(&config).expect("should discover");

        // Answered locally, so no node needs to be running.
        let requested = wallet.request_accounts().await?;
        let authorized = wallet.accounts().await?;

        let expected: Address =
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse()?;
        assert!(wallet.signs_locally());
        assert_eq!(requested, vec![expected]);
        assert_eq!(authorized, vec![expected]);
        Ok(())
    }
}
