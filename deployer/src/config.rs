//! Runtime configuration.
//!
//! Everything is read from the environment: `RPC_URL` points at the wallet
//! provider, `PRIVATE_KEY` switches to local signing and `TOKEN_ARTIFACT`
//! replaces the bundled contract artifact. Empty values count as unset.

use std::path::{Path, PathBuf};

use alloy::{signers::local::PrivateKeySigner, transports::http::reqwest::Url};
use thiserror::Error;

/// Environment variable holding the provider's RPC endpoint.
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";
/// Environment variable holding a hex-encoded private key.
pub const PRIVATE_KEY_ENV_VAR_NAME: &str = "PRIVATE_KEY";
/// Environment variable holding the path of a contract artifact.
pub const ARTIFACT_ENV_VAR_NAME: &str = "TOKEN_ARTIFACT";

/// Errors raised while building a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The RPC endpoint is not a valid URL.
    #[error("invalid rpc url `{url}`: {reason}")]
    InvalidRpcUrl {
        /// The rejected value.
        url: String,
        /// Why parsing failed.
        reason: String,
    },
    /// The private key could not be parsed.
    #[error("invalid private key")]
    InvalidPrivateKey,
}

/// Deployer configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    rpc_url: Option<Url>,
    signer: Option<PrivateKeySigner>,
    artifact: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidRpcUrl`] - If `RPC_URL` is malformed.
    /// * [`ConfigError::InvalidPrivateKey`] - If `PRIVATE_KEY` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidRpcUrl`] - If the rpc url is malformed.
    /// * [`ConfigError::InvalidPrivateKey`] - If the private key is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = var(RPC_URL_ENV_VAR_NAME) {
            config = config.with_rpc_url(&url)?;
        }
        if let Some(key) = var(PRIVATE_KEY_ENV_VAR_NAME) {
            config = config.with_private_key(&key)?;
        }
        if let Some(path) = var(ARTIFACT_ENV_VAR_NAME) {
            config = config.with_artifact(path);
        }
        Ok(config)
    }

    /// Sets the provider's RPC endpoint.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidRpcUrl`] - If `url` is malformed.
    pub fn with_rpc_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let parsed = url.trim().parse::<Url>().map_err(|e| {
            ConfigError::InvalidRpcUrl {
                url: url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        self.rpc_url = Some(parsed);
        Ok(self)
    }

    /// Sets the key transactions get signed with.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidPrivateKey`] - If `key` is not a valid
    ///   hex-encoded secp256k1 key.
    pub fn with_private_key(mut self, key: &str) -> Result<Self, ConfigError> {
        let signer = key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|_| ConfigError::InvalidPrivateKey)?;
        self.signer = Some(signer);
        Ok(self)
    }

    /// Sets the path of the contract artifact to deploy.
    #[must_use]
    pub fn with_artifact(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact = Some(path.into());
        self
    }

    /// The provider's RPC endpoint, if any.
    #[must_use]
    pub fn rpc_url(&self) -> Option<&Url> {
        self.rpc_url.as_ref()
    }

    /// The local signer, if any.
    #[must_use]
    pub fn signer(&self) -> Option<&PrivateKeySigner> {
        self.signer.as_ref()
    }

    /// The artifact override, if any.
    #[must_use]
    pub fn artifact(&self) -> Option<&Path> {
        self.artifact.as_deref()
    }
}
