//! Passcode challenge on the controlling terminal.

use std::io::{BufRead, Write};

use async_trait::async_trait;
use bucketlist_auth::{AuthErrorCode, Authenticator, Capability, PlatformError};
use subtle::ConstantTimeEq;

/// Authenticator that asks for the configured passcode on stdin.
///
/// An empty answer counts as the user cancelling.
pub(crate) struct TerminalAuthenticator {
    passcode: Option<String>,
}

impl TerminalAuthenticator {
    pub(crate) fn new(passcode: Option<String>) -> Self {
        Self { passcode }
    }
}

#[async_trait]
impl Authenticator for TerminalAuthenticator {
    fn capability(&self) -> Capability {
        if self.passcode.is_some() {
            Capability::Available
        } else {
            Capability::Unavailable(Some(PlatformError::new(
                AuthErrorCode::PasscodeNotSet,
                "BUCKETLIST_PASSCODE is not set",
            )))
        }
    }

    async fn evaluate(&self, reason: &str) -> Result<(), PlatformError> {
        let Some(expected) = self.passcode.clone() else {
            return Err(PlatformError::new(
                AuthErrorCode::PasscodeNotSet,
                "BUCKETLIST_PASSCODE is not set",
            ));
        };

        let prompt = reason.to_string();
        let entered = tokio::task::spawn_blocking(move || read_passcode(&prompt))
            .await
            .map_err(|e| PlatformError::other(format!("passcode prompt failed: {e}")))?
            .map_err(|e| PlatformError::other(format!("could not read passcode: {e}")))?;

        check_passcode(&expected, &entered)
    }
}

fn read_passcode(reason: &str) -> std::io::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{reason}\nPasscode: ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Compares an entered passcode against the expected one in constant time.
pub(crate) fn check_passcode(expected: &str, entered: &str) -> Result<(), PlatformError> {
    if entered.is_empty() {
        return Err(PlatformError::new(
            AuthErrorCode::UserCancel,
            "passcode entry cancelled",
        ));
    }
    if bool::from(expected.as_bytes().ct_eq(entered.as_bytes())) {
        Ok(())
    } else {
        Err(PlatformError::new(
            AuthErrorCode::AuthenticationFailed,
            "passcode did not match",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passcode_succeeds() {
        assert!(check_passcode("2468", "2468").is_ok());
    }

    #[test]
    fn wrong_passcode_fails_authentication() {
        let err = check_passcode("2468", "1357").unwrap_err();
        assert_eq!(err.code, Some(AuthErrorCode::AuthenticationFailed));
    }

    #[test]
    fn different_length_passcode_fails_authentication() {
        let err = check_passcode("2468", "24680").unwrap_err();
        assert_eq!(err.code, Some(AuthErrorCode::AuthenticationFailed));
    }

    #[test]
    fn empty_entry_is_a_cancel() {
        let err = check_passcode("2468", "").unwrap_err();
        assert_eq!(err.code, Some(AuthErrorCode::UserCancel));
    }

    #[test]
    fn missing_passcode_reports_passcode_not_set() {
        let auth = TerminalAuthenticator::new(None);
        match auth.capability() {
            Capability::Unavailable(Some(err)) => {
                assert_eq!(err.code, Some(AuthErrorCode::PasscodeNotSet));
            }
            other => panic!("expected Unavailable, got: {other:?}"),
        }
    }

    #[test]
    fn configured_passcode_is_available() {
        let auth = TerminalAuthenticator::new(Some("2468".to_string()));
        assert_eq!(auth.capability(), Capability::Available);
    }
}
