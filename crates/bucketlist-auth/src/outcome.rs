use thiserror::Error;

/// Result codes a device authentication API can report.
///
/// `TouchId*` variants are the older device-specific names. Some platforms
/// still report them separately from the generic biometry codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    AuthenticationFailed,
    UserCancel,
    UserFallback,
    SystemCancel,
    PasscodeNotSet,
    BiometryNotAvailable,
    TouchIdNotAvailable,
    BiometryNotEnrolled,
    TouchIdNotEnrolled,
    BiometryLockout,
    TouchIdLockout,
    AppCancel,
    InvalidContext,
    NotInteractive,
    BiometryNotPaired,
    BiometryDisconnected,
    /// A raw code this enumeration does not know.
    Other(i64),
}

impl AuthErrorCode {
    /// Maps a raw platform status code onto the enumeration.
    ///
    /// Device-specific aliases share their generic code's value, so raw input
    /// always resolves to the generic variant.
    #[must_use]
    pub fn from_raw(code: i64) -> Self {
        match code {
            -1 => Self::AuthenticationFailed,
            -2 => Self::UserCancel,
            -3 => Self::UserFallback,
            -4 => Self::SystemCancel,
            -5 => Self::PasscodeNotSet,
            -6 => Self::BiometryNotAvailable,
            -7 => Self::BiometryNotEnrolled,
            -8 => Self::BiometryLockout,
            -9 => Self::AppCancel,
            -10 => Self::InvalidContext,
            -12 => Self::BiometryNotPaired,
            -13 => Self::BiometryDisconnected,
            -1004 => Self::NotInteractive,
            other => Self::Other(other),
        }
    }
}

/// An error handed back by the platform authentication API.
///
/// `code` is `None` when the failure did not come from the authentication
/// framework at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct PlatformError {
    pub code: Option<AuthErrorCode>,
    pub description: String,
}

impl PlatformError {
    #[must_use]
    pub fn new(code: AuthErrorCode, description: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            description: description.into(),
        }
    }

    /// An error from outside the authentication framework.
    #[must_use]
    pub fn other(description: impl Into<String>) -> Self {
        Self {
            code: None,
            description: description.into(),
        }
    }
}

/// User-facing category of a failed authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    UserCancelled,
    BiometryNotAvailable,
    BiometryNotEnrolled,
    BiometryLockout,
    PasscodeNotSet,
    AuthenticationFailed,
    Unknown { detail: String },
}

/// A pending alert for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl AuthenticationOutcome {
    /// Cancellations are deliberate and never raise an alert.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::UserCancelled => "Authentication cancelled",
            Self::BiometryNotAvailable => "Biometry unavailable",
            Self::BiometryNotEnrolled => "Biometry not set up",
            Self::BiometryLockout => "Biometry locked",
            Self::PasscodeNotSet => "Passcode not set",
            Self::AuthenticationFailed => "Try again",
            Self::Unknown { .. } => "Unknown error",
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UserCancelled => "Authentication was cancelled.",
            Self::BiometryNotAvailable => {
                "Biometric authentication is not supported on this device."
            }
            Self::BiometryNotEnrolled => "Set up Touch ID or Face ID in the device settings.",
            Self::BiometryLockout => "Too many failed attempts. Use the device passcode.",
            Self::PasscodeNotSet => "Set a device passcode in the settings.",
            Self::AuthenticationFailed => {
                "Authentication failed. Try your fingerprint or face again."
            }
            Self::Unknown { detail } => detail.as_str(),
        }
    }

    #[must_use]
    pub fn alert(&self) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message().to_string(),
        }
    }
}

/// Folds a platform error into exactly one [`AuthenticationOutcome`].
#[must_use]
pub fn classify(error: &PlatformError) -> AuthenticationOutcome {
    use AuthErrorCode as C;

    match error.code {
        Some(C::UserCancel | C::AppCancel) => AuthenticationOutcome::UserCancelled,
        Some(C::BiometryNotAvailable | C::TouchIdNotAvailable) => {
            AuthenticationOutcome::BiometryNotAvailable
        }
        Some(C::BiometryNotEnrolled | C::TouchIdNotEnrolled) => {
            AuthenticationOutcome::BiometryNotEnrolled
        }
        Some(C::BiometryLockout | C::TouchIdLockout) => AuthenticationOutcome::BiometryLockout,
        Some(C::PasscodeNotSet) => AuthenticationOutcome::PasscodeNotSet,
        Some(C::AuthenticationFailed) => AuthenticationOutcome::AuthenticationFailed,
        Some(
            C::UserFallback
            | C::SystemCancel
            | C::InvalidContext
            | C::NotInteractive
            | C::BiometryNotPaired
            | C::BiometryDisconnected
            | C::Other(_),
        )
        | None => AuthenticationOutcome::Unknown {
            detail: error.description.clone(),
        },
    }
}

#[cfg(test)]
#[path = "outcome_test.rs"]
mod tests;
