//! Command-line front end for the token deployer.
//!
//! Reads `RPC_URL`, `PRIVATE_KEY` and `TOKEN_ARTIFACT` from the environment
//! or a `.env` file; the matching flags take precedence.
//!
//! ```bash
//! export RPC_URL="http://localhost:8545"
//! token-deployer-cli connect
//! token-deployer-cli deploy --name "Test Token" --symbol TTK --supply 1000000
//! ```

mod cli;
mod render;

use clap::Parser;
use eyre::{bail, Result, WrapErr};
use token_deployer::{
    App, Config, ContractArtifact, DeploymentStatus, RpcWallet,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Command},
    render::{ArtifactPanel, NetworksTable, OutcomePanel, SessionPanel},
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing `.env` file is fine.
    let _ = dotenvy::dotenv();
    init_logging();

    let cli = Cli::parse();
    let config = cli.config().wrap_err("invalid configuration")?;

    match cli.command {
        Command::Networks => print!("{NetworksTable}"),
        Command::Artifact => {
            let artifact = load_artifact(&config)?;
            print!("{}", ArtifactPanel(&artifact));
        }
        Command::Connect => {
            let mut app = app(&config)?;
            let connected = app.connect().await.map(|_| ());
            print!("{}", SessionPanel(&app.state().session));
            connected.wrap_err("failed to connect wallet")?;
        }
        Command::Deploy(args) => {
            let mut app = app(&config)?;
            for (field, value) in args.edits() {
                app.edit(field, value);
            }

            app.connect().await.wrap_err("failed to connect wallet")?;
            print!("{}", SessionPanel(&app.state().session));

            app.deploy().await.wrap_err("deployment not submitted")?;
            let Some(outcome) = &app.state().outcome else {
                bail!("deployment produced no outcome");
            };
            print!("{}", OutcomePanel(outcome));
            if outcome.status() != DeploymentStatus::Success {
                bail!("deployment failed");
            }
        }
    }

    Ok(())
}

/// Installs the `tracing` subscriber, filtered by `RUST_LOG`.
fn init_logging() {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    // Default to info for the deployer, warn for everything else.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("token_deployer=info,warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(env_filter)
        .init();
}

fn load_artifact(config: &Config) -> Result<ContractArtifact> {
    match config.artifact() {
        Some(path) => {
            debug!(path = %path.display(), "loading contract artifact");
            ContractArtifact::from_path(path).wrap_err_with(|| {
                format!("failed to load artifact {}", path.display())
            })
        }
        None => ContractArtifact::bundled()
            .wrap_err("bundled artifact is malformed"),
    }
}

fn app(config: &Config) -> Result<App<RpcWallet>> {
    let artifact = load_artifact(config)?;
    Ok(App::new(RpcWallet::discover(config), artifact))
}
