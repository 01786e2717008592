use alloy::{signers::local::PrivateKeySigner, transports::http::reqwest::Url};
use eyre::{Context, Result};

pub(crate) const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";
pub(crate) const MASTER_PRIVATE_KEY_ENV_VAR_NAME: &str = "MASTER_PRIVATE_KEY";

/// First prefunded account of `anvil` and `hardhat` dev nodes.
const DEFAULT_MASTER_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Load the `name` environment variable.
fn env(name: &str) -> Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// The dev node's rpc endpoint, read from `RPC_URL`.
///
/// # Errors
///
/// May fail if `RPC_URL` is unset or is not a valid URL.
pub fn rpc_url() -> Result<Url> {
    env(RPC_URL_ENV_VAR_NAME)?
        .parse()
        .wrap_err("failed to parse RPC_URL string into a URL")
}

/// Signer of the account every test account gets funded from.
///
/// Read from `MASTER_PRIVATE_KEY`, falling back to the dev node's first
/// prefunded account.
pub(crate) fn master_signer() -> Result<PrivateKeySigner> {
    let key = env(MASTER_PRIVATE_KEY_ENV_VAR_NAME)
        .unwrap_or_else(|_| DEFAULT_MASTER_PRIVATE_KEY.to_owned());
    key.parse().wrap_err("failed to create master signer")
}
