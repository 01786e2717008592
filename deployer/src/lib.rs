/*!
# Token Deployer

Connect a wallet, fill in a token's name, symbol and initial supply, and
deploy a fixed ERC-20 contract in a single contract-creation transaction.

The wallet is reached through the [`WalletProvider`] trait. [`RpcWallet`]
implements it on top of a JSON-RPC endpoint, either signing locally with a
configured private key or letting the node manage accounts.

## Usage

```ignore
use token_deployer::{App, Config, ContractArtifact, Field, RpcWallet};

let config = Config::from_env()?;
let mut app = App::new(RpcWallet::discover(&config), ContractArtifact::bundled()?);

app.connect().await?;
app.edit(Field::Name, "Test Token");
app.edit(Field::Symbol, "TTK");
app.edit(Field::Supply, "1000000");
app.deploy().await?;

if let Some(outcome) = &app.state().outcome {
    println!("{:?} {:?}", outcome.status(), outcome.transaction_hash());
}
```

Everything the user sees lives in [`AppState`], which only changes through
[`AppState::reduce`].
*/

pub mod app;
pub mod artifact;
pub mod config;
pub mod deploy;
pub mod form;
pub mod network;
pub mod outcome;
pub mod provider;
pub mod session;
pub mod state;

pub use app::App;
pub use artifact::{ArtifactError, ContractArtifact};
pub use config::{Config, ConfigError};
pub use deploy::{deploy, Constructor, DeployError, DeployRequest, Deployer};
pub use form::{Field, TokenDeployForm, ValidationError};
pub use network::{network_name, NetworkId};
pub use outcome::{DeploymentOutcome, DeploymentStatus, OutcomeError};
#[cfg(feature = "testing")]
pub use provider::MockWalletProvider;
pub use provider::{DeployReceipt, ProviderError, RpcWallet, WalletProvider};
pub use session::{connect, ConnectError, WalletSession};
pub use state::{Action, AppState};
