use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{uint, Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::{ensure, Result};
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::system::{master_signer, rpc_url};

/// One ether.
const DEFAULT_FUNDING_WEI: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Type that corresponds to a test account.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: DynProvider,
    url: Url,
}

impl Account {
    /// Create a new account funded with [`DEFAULT_FUNDING_WEI`].
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or if funding the newly created
    /// account fails.
    pub async fn new() -> Result<Self> {
        AccountFactory::create().await
    }

    /// This account's private key, `0x`-prefixed, in the format `PRIVATE_KEY`
    /// expects.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode_prefixed(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connected to.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get gas token balance.
    ///
    /// # Errors
    ///
    /// May fail if the node cannot be reached.
    pub async fn balance(&self) -> Result<U256> {
        Ok(self.wallet.get_balance(self.address()).await?)
    }
}

/// A unit struct used as a synchronization mechanism in
/// [`SYNC_ACCOUNT_FACTORY`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// Accounts get funded from a single master wallet, so creation must
        /// be serialized or the master's nonce goes stale.
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create new account and fund it from the master account.
    ///
    /// # Errors
    ///
    /// May fail if the node cannot be reached or if the funding transfer
    /// fails.
    async fn create() -> Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let address = signer.address();
        let url = rpc_url()?;

        let master = master_signer()?;
        let master_wallet = ProviderBuilder::new()
            .wallet(EthereumWallet::from(master.clone()))
            .connect_http(url.clone());

        let tx = TransactionRequest::default()
            .with_from(master.address())
            .with_to(address)
            .with_value(DEFAULT_FUNDING_WEI);

        let receipt =
            master_wallet.send_transaction(tx).await?.get_receipt().await?;
        ensure!(
            ReceiptResponse::status(&receipt),
            "account's wallet wasn't funded - address is {address}"
        );
        debug!(%address, "funded test account");

        let wallet = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_http(url.clone())
            .erased();

        Ok(Account { signer, wallet, url })
    }
}
