//! Deployment requests.
//!
//! A request is checked entirely before anything reaches the wallet: the form
//! must validate, a session must be connected, and the constructor arguments
//! must encode against the artifact's ABI. Only then is exactly one
//! contract-creation transaction submitted, and its answer recorded in a
//! [`DeploymentOutcome`].

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, Bytes, U256},
};
use thiserror::Error;
use tracing::{error, info};

use crate::{
    artifact::{ArtifactError, ContractArtifact},
    form::{TokenDeployForm, ValidationError},
    outcome::DeploymentOutcome,
    provider::{DeployReceipt, ProviderError, WalletProvider},
    session::WalletSession,
};

/// Reasons a deployment is not attempted.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The form is incomplete or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No wallet is connected.
    #[error("Connect a wallet before deploying")]
    NotConnected,
    /// The constructor arguments do not fit the artifact.
    #[error(transparent)]
    Encoding(#[from] ArtifactError),
}

/// Token constructor arguments: `(string name, string symbol, uint256
/// initialSupply)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Initial supply in whole tokens; the contract scales it by its
    /// decimals.
    pub initial_supply: U256,
}

impl Constructor {
    /// Constructor arguments as dynamic ABI values, in declaration order.
    #[must_use]
    pub fn abi_values(&self) -> Vec<DynSolValue> {
        vec![
            DynSolValue::String(self.name.clone()),
            DynSolValue::String(self.symbol.clone()),
            DynSolValue::Uint(self.initial_supply, 256),
        ]
    }
}

/// Builds creation code for an artifact.
pub struct Deployer<'a> {
    artifact: &'a ContractArtifact,
    ctr: Option<Constructor>,
}

impl<'a> Deployer<'a> {
    /// Create a deployer for `artifact`.
    #[must_use]
    pub fn new(artifact: &'a ContractArtifact) -> Self {
        Self { artifact, ctr: None }
    }

    /// Add constructor arguments to the deployer.
    #[must_use]
    pub fn with_constructor(mut self, ctr: Constructor) -> Self {
        self.ctr = Some(ctr);
        self
    }

    /// Bytecode followed by the encoded constructor arguments, if any.
    ///
    /// # Errors
    ///
    /// * [`DeployError::Encoding`] - If the arguments do not match the
    ///   artifact's constructor.
    pub fn creation_code(&self) -> Result<Bytes, DeployError> {
        let args = self.ctr.as_ref().map(Constructor::abi_values);
        Ok(self.artifact.creation_code(args.as_deref().unwrap_or_default())?)
    }

    /// Validates `form` against `session` and prepares the request.
    ///
    /// # Errors
    ///
    /// * [`DeployError::Validation`] - If the form does not validate.
    /// * [`DeployError::NotConnected`] - If no account is connected.
    /// * [`DeployError::Encoding`] - If the arguments do not fit the
    ///   artifact.
    pub fn prepare(
        self,
        form: &TokenDeployForm,
        session: &WalletSession,
    ) -> Result<DeployRequest, DeployError> {
        let ctr = form.validate()?;
        let from = session.active_account().ok_or(DeployError::NotConnected)?;
        let code = self.with_constructor(ctr).creation_code()?;
        Ok(DeployRequest { from, code })
    }
}

/// A validated contract-creation request, ready to be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployRequest {
    /// The sending account.
    pub from: Address,
    /// Creation code: bytecode and constructor arguments.
    pub code: Bytes,
}

impl DeployRequest {
    /// Sends the request through `provider` and waits for its answer.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`] raised by `provider`.
    pub async fn send(
        self,
        provider: &dyn WalletProvider,
    ) -> Result<DeployReceipt, ProviderError> {
        info!(
            from = %self.from,
            code_len = self.code.len(),
            "submitting deployment"
        );

        let result = provider.send_deployment(self.from, self.code).await;
        match &result {
            Ok(receipt) => info!(
                tx_hash = %receipt.transaction_hash,
                contract = %receipt.contract_address,
                "token deployed"
            ),
            Err(e) => error!(error = %e, "token deployment failed"),
        }
        result
    }

    /// Sends the request and records the answer in a new outcome.
    ///
    /// Provider errors become a failed outcome.
    pub async fn submit(
        self,
        provider: &dyn WalletProvider,
    ) -> DeploymentOutcome {
        let result = self.send(provider).await.map_err(|e| e.to_string());
        DeploymentOutcome::from_result(result)
    }
}

/// Deploys a token from `form` on behalf of `session`.
///
/// # Errors
///
/// Fails, without contacting `provider`, on any error of
/// [`Deployer::prepare`]. Provider failures are reported in the returned
/// outcome instead.
pub async fn deploy(
    provider: &dyn WalletProvider,
    artifact: &ContractArtifact,
    form: &TokenDeployForm,
    session: &WalletSession,
) -> Result<DeploymentOutcome, DeployError> {
    let request = Deployer::new(artifact).prepare(form, session)?;
    Ok(request.submit(provider).await)
}
