//! Application driver.
//!
//! [`App`] owns the state, the optional wallet provider and the contract
//! artifact. It performs the two provider round-trips, connecting and
//! deploying, one at a time, and feeds their results back into
//! [`AppState::reduce`] as actions.

use std::mem;

use crate::{
    artifact::ContractArtifact,
    deploy::{DeployError, Deployer},
    form::Field,
    provider::WalletProvider,
    session::{self, ConnectError, WalletSession},
    state::{Action, AppState},
};

/// Token deployer application.
pub struct App<P> {
    provider: Option<P>,
    artifact: ContractArtifact,
    state: AppState,
}

impl<P: WalletProvider> App<P> {
    /// Create an application that deploys `artifact` through `provider`.
    ///
    /// A `None` provider means no wallet is installed; connecting will
    /// report it.
    pub fn new(provider: Option<P>, artifact: ContractArtifact) -> Self {
        Self { provider, artifact, state: AppState::default() }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        apply(&mut self.state, action);
    }

    /// Connects the wallet.
    ///
    /// # Errors
    ///
    /// Any [`ConnectError`]; its message is also left in
    /// [`AppState::notice`].
    pub async fn connect(&mut self) -> Result<&WalletSession, ConnectError> {
        let provider = self.provider.as_ref().map(|p| p as &dyn WalletProvider);
        match session::connect(provider).await {
            Ok(session) => {
                self.dispatch(Action::Connected(session));
                Ok(&self.state.session)
            }
            Err(e) => {
                self.dispatch(Action::ConnectFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Forgets the wallet session.
    pub fn disconnect(&mut self) {
        self.dispatch(Action::Disconnected);
    }

    /// Connects when disconnected, disconnects when connected.
    ///
    /// # Errors
    ///
    /// Any [`ConnectError`] raised while connecting.
    pub async fn toggle_connection(&mut self) -> Result<(), ConnectError> {
        if self.state.session.connected {
            self.disconnect();
        } else {
            self.connect().await?;
        }
        Ok(())
    }

    /// Edits a form field.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::Edit(field, value.into()));
    }

    /// Deploys a token from the current form.
    ///
    /// The outcome lands in [`AppState::outcome`]. Provider failures do not
    /// fail this call; they are recorded there as a failed outcome.
    ///
    /// # Errors
    ///
    /// Any [`DeployError`], raised before the provider is contacted. Its
    /// message is also left in [`AppState::notice`].
    pub async fn deploy(&mut self) -> Result<(), DeployError> {
        let prepared = Deployer::new(&self.artifact)
            .prepare(&self.state.form, &self.state.session)
            .and_then(|request| match &self.provider {
                Some(provider) => Ok((request, provider)),
                None => Err(DeployError::NotConnected),
            });
        let (request, provider) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                apply(&mut self.state, Action::Rejected(e.to_string()));
                return Err(e);
            }
        };

        apply(&mut self.state, Action::DeploySubmitted);
        let result = request.send(provider).await.map_err(|e| e.to_string());
        apply(&mut self.state, Action::DeployResolved(result));
        Ok(())
    }
}

fn apply(state: &mut AppState, action: Action) {
    *state = mem::take(state).reduce(action);
}
