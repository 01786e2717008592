//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use token_deployer::{
    config::{
        ARTIFACT_ENV_VAR_NAME, PRIVATE_KEY_ENV_VAR_NAME, RPC_URL_ENV_VAR_NAME,
    },
    Config, ConfigError, Field,
};

/// Deploy ERC-20 tokens from a connected wallet.
#[derive(Parser, Debug)]
#[command(name = "token-deployer-cli")]
#[command(about = "Connect a wallet and deploy an ERC-20 token")]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// RPC endpoint of the wallet provider
    #[arg(global = true, long, env = RPC_URL_ENV_VAR_NAME)]
    pub(crate) rpc_url: Option<String>,

    /// Hex-encoded private key; sign locally instead of through the node
    #[arg(
        global = true,
        long,
        env = PRIVATE_KEY_ENV_VAR_NAME,
        hide_env_values = true
    )]
    pub(crate) private_key: Option<String>,

    /// Contract artifact to deploy instead of the bundled token
    #[arg(global = true, long, env = ARTIFACT_ENV_VAR_NAME)]
    pub(crate) artifact: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Connect the wallet and show the session
    Connect,

    /// Deploy a token
    Deploy(TokenArgs),

    /// List the networks known by name
    Networks,

    /// Show the contract artifact that gets deployed
    Artifact,
}

/// Token parameters, as typed by the user.
#[derive(clap::Args, Debug)]
pub(crate) struct TokenArgs {
    /// Token name
    #[arg(long, default_value = "")]
    pub(crate) name: String,

    /// Token symbol
    #[arg(long, default_value = "")]
    pub(crate) symbol: String,

    /// Initial supply, in whole tokens
    #[arg(long, default_value = "")]
    pub(crate) supply: String,
}

impl TokenArgs {
    /// Form edits, in field order.
    pub(crate) fn edits(self) -> [(Field, String); 3] {
        [
            (Field::Name, self.name),
            (Field::Symbol, self.symbol),
            (Field::Supply, self.supply),
        ]
    }
}

impl Cli {
    /// Builds the deployer configuration from the parsed flags.
    ///
    /// Flags already fall back to the environment, so they are the only
    /// source consulted here.
    pub(crate) fn config(&self) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| match name {
            RPC_URL_ENV_VAR_NAME => self.rpc_url.clone(),
            PRIVATE_KEY_ENV_VAR_NAME => self.private_key.clone(),
            ARTIFACT_ENV_VAR_NAME => self
                .artifact
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
            _ => None,
        })
    }
}
