//! Application state.
//!
//! [`AppState`] is an immutable value. Every change goes through
//! [`AppState::reduce`], which consumes the current state and an [`Action`]
//! and returns the next state.

use tracing::warn;

use crate::{
    form::{Field, TokenDeployForm},
    outcome::DeploymentOutcome,
    provider::DeployReceipt,
    session::WalletSession,
};

/// Something that happened, either a user edit or a provider answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A wallet connected.
    Connected(WalletSession),
    /// Connecting failed; the message is shown to the user.
    ConnectFailed(String),
    /// The user disconnected.
    Disconnected,
    /// The user edited a form field.
    Edit(Field, String),
    /// A deployment was refused before submission; the message is shown to
    /// the user.
    Rejected(String),
    /// A deployment was submitted.
    DeploySubmitted,
    /// The submitted deployment resolved.
    DeployResolved(Result<DeployReceipt, String>),
}

/// Everything the user sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// The wallet session.
    pub session: WalletSession,
    /// The deployment form.
    pub form: TokenDeployForm,
    /// The last deployment, if any.
    pub outcome: Option<DeploymentOutcome>,
    /// A message for the user, e.g. why the last action was refused.
    pub notice: Option<String>,
}

impl AppState {
    /// Applies `action` and returns the next state.
    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Connected(session) => {
                Self { session, notice: None, ..self }
            }
            Action::ConnectFailed(message) => Self {
                session: WalletSession::default(),
                notice: Some(message),
                ..self
            },
            Action::Disconnected => {
                let mut session = self.session;
                session.disconnect();
                Self { session, notice: None, ..self }
            }
            Action::Edit(field, value) => {
                let mut form = self.form;
                form.set(field, value);
                Self { form, ..self }
            }
            Action::Rejected(message) => Self { notice: Some(message), ..self },
            Action::DeploySubmitted => {
                if self.is_deploying() {
                    warn!("deployment already pending, ignoring submission");
                    return self;
                }
                Self {
                    outcome: Some(DeploymentOutcome::pending()),
                    notice: None,
                    ..self
                }
            }
            Action::DeployResolved(result) => {
                let Some(mut outcome) = self.outcome.clone() else {
                    warn!("deployment resolved without a submission, ignoring");
                    return self;
                };
                if let Err(e) = outcome.resolve(result) {
                    warn!(error = %e, "ignoring second deployment resolution");
                    return self;
                }
                Self { outcome: Some(outcome), ..self }
            }
        }
    }

    /// Whether a deployment is waiting for its answer.
    #[must_use]
    pub fn is_deploying(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| !o.is_resolved())
    }
}
