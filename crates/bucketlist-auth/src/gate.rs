use async_trait::async_trait;
use tokio::sync::watch;

use crate::outcome::{classify, Alert, AuthenticationOutcome, PlatformError};

/// Justification shown by the platform prompt.
pub const UNLOCK_REASON: &str = "Please authenticate to unlock your places.";

/// Whether the device can run a challenge at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    /// The check failed, optionally with the platform's reason.
    Unavailable(Option<PlatformError>),
}

/// Platform seam for biometric or passcode challenges.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Checks whether a challenge can be presented.
    fn capability(&self) -> Capability;

    /// Presents one challenge with the given justification.
    async fn evaluate(&self, reason: &str) -> Result<(), PlatformError>;
}

/// Observable state of an [`AuthenticationGate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateState {
    pub is_unlocked: bool,
    pub pending_alert: Option<Alert>,
}

/// Drives one challenge per unlock attempt and exposes the result as
/// [`GateState`].
///
/// State only changes inside `&mut self` methods, after any await has
/// resumed on the caller's task.
pub struct AuthenticationGate<A> {
    authenticator: A,
    state: watch::Sender<GateState>,
}

impl<A: Authenticator> AuthenticationGate<A> {
    pub fn new(authenticator: A) -> Self {
        let (state, _) = watch::channel(GateState::default());
        Self {
            authenticator,
            state,
        }
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.state.borrow().is_unlocked
    }

    #[must_use]
    pub fn pending_alert(&self) -> Option<Alert> {
        self.state.borrow().pending_alert.clone()
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Runs one unlock attempt.
    ///
    /// Returns the outcome of a failed attempt, or `None` once unlocked. A
    /// cancelled challenge returns [`AuthenticationOutcome::UserCancelled`]
    /// and leaves state untouched.
    pub async fn authenticate(&mut self) -> Option<AuthenticationOutcome> {
        match self.authenticator.capability() {
            Capability::Available => {}
            Capability::Unavailable(error) => {
                let outcome = error
                    .as_ref()
                    .map_or(AuthenticationOutcome::BiometryNotAvailable, classify);
                tracing::warn!(?outcome, "device cannot present an authentication challenge");
                self.raise(&outcome);
                return Some(outcome);
            }
        }

        tracing::debug!("presenting authentication challenge");
        let result = self.authenticator.evaluate(UNLOCK_REASON).await;

        match result {
            Ok(()) => {
                tracing::info!("authentication succeeded");
                self.state.send_modify(|s| s.is_unlocked = true);
                None
            }
            Err(error) => {
                let outcome = classify(&error);
                if outcome.is_cancellation() {
                    tracing::info!("authentication cancelled by user");
                } else {
                    tracing::warn!(?outcome, "authentication failed");
                    self.raise(&outcome);
                }
                Some(outcome)
            }
        }
    }

    /// Clears the pending alert once the presentation layer has shown it.
    pub fn dismiss_alert(&mut self) {
        self.state.send_if_modified(|s| s.pending_alert.take().is_some());
    }

    /// Returns to the locked state, keeping any pending alert.
    pub fn lock(&mut self) {
        self.state.send_if_modified(|s| std::mem::replace(&mut s.is_unlocked, false));
    }

    fn raise(&mut self, outcome: &AuthenticationOutcome) {
        let alert = outcome.alert();
        self.state.send_modify(|s| {
            s.pending_alert = Some(alert);
            s.is_unlocked = false;
        });
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
