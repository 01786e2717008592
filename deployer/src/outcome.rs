//! Deployment outcome.
//!
//! An outcome starts [`DeploymentStatus::Pending`] when a deployment is
//! submitted and is resolved exactly once, by whichever of receipt or error
//! arrives first. Later resolutions are rejected and leave it untouched.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

use crate::provider::DeployReceipt;

/// Where a deployment stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentStatus {
    /// Submitted, waiting for a receipt or an error.
    Pending,
    /// The contract was deployed.
    Success,
    /// The deployment failed.
    Failure,
}

/// Error returned when resolving an already resolved outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The outcome already reached a terminal state.
    #[error("deployment outcome already resolved as {0:?}")]
    AlreadyResolved(DeploymentStatus),
}

/// Result of a single deployment request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentOutcome {
    status: DeploymentStatus,
    transaction_hash: Option<TxHash>,
    contract_address: Option<Address>,
    error: Option<String>,
}

impl Default for DeploymentOutcome {
    fn default() -> Self {
        Self::pending()
    }
}

impl DeploymentOutcome {
    /// A freshly submitted deployment.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            status: DeploymentStatus::Pending,
            transaction_hash: None,
            contract_address: None,
            error: None,
        }
    }

    /// A deployment already resolved with the provider's answer.
    #[must_use]
    pub fn from_result(result: Result<DeployReceipt, String>) -> Self {
        match result {
            Ok(receipt) => Self {
                status: DeploymentStatus::Success,
                transaction_hash: Some(receipt.transaction_hash),
                contract_address: Some(receipt.contract_address),
                error: None,
            },
            Err(error) => Self {
                status: DeploymentStatus::Failure,
                error: Some(error),
                ..Self::pending()
            },
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> DeploymentStatus {
        self.status
    }

    /// Hash of the deployment transaction, set only on success.
    #[must_use]
    pub fn transaction_hash(&self) -> Option<TxHash> {
        self.transaction_hash
    }

    /// Address of the deployed contract, set only on success.
    #[must_use]
    pub fn contract_address(&self) -> Option<Address> {
        self.contract_address
    }

    /// Why the deployment failed, set only on failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the outcome reached a terminal state.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status != DeploymentStatus::Pending
    }

    /// Resolves the outcome with the provider's answer.
    ///
    /// # Errors
    ///
    /// * [`OutcomeError::AlreadyResolved`] - If the outcome is no longer
    ///   pending.
    pub fn resolve(
        &mut self,
        result: Result<DeployReceipt, String>,
    ) -> Result<(), OutcomeError> {
        match result {
            Ok(receipt) => self.succeed(receipt),
            Err(error) => self.fail(error),
        }
    }

    /// Marks the deployment as successful.
    ///
    /// # Errors
    ///
    /// * [`OutcomeError::AlreadyResolved`] - If the outcome is no longer
    ///   pending.
    pub fn succeed(
        &mut self,
        receipt: DeployReceipt,
    ) -> Result<(), OutcomeError> {
        self.ensure_pending()?;
        *self = Self::from_result(Ok(receipt));
        Ok(())
    }

    /// Marks the deployment as failed.
    ///
    /// # Errors
    ///
    /// * [`OutcomeError::AlreadyResolved`] - If the outcome is no longer
    ///   pending.
    pub fn fail(
        &mut self,
        error: impl Into<String>,
    ) -> Result<(), OutcomeError> {
        self.ensure_pending()?;
        *self = Self::from_result(Err(error.into()));
        Ok(())
    }

    fn ensure_pending(&self) -> Result<(), OutcomeError> {
        if self.is_resolved() {
            return Err(OutcomeError::AlreadyResolved(self.status));
        }
        Ok(())
    }
}
