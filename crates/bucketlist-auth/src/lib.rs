//! Device-owner authentication gate.
//!
//! Platform challenges are reached through the [`Authenticator`] trait. Their
//! error vocabulary is folded into [`AuthenticationOutcome`] by [`classify`]
//! before anything reaches observable state.

mod gate;
mod outcome;

pub use gate::{AuthenticationGate, Authenticator, Capability, GateState, UNLOCK_REASON};
pub use outcome::{classify, Alert, AuthErrorCode, AuthenticationOutcome, PlatformError};
