//! Login checks against the credential store.
//!
//! Passwords are compared as plain strings. There is no hashing, throttling
//! or session handling here; a successful check is all a caller gets.

use log::{info, warn};

use crate::stores::CredentialStore;
use crate::Error;

pub const LOGIN_SUCCESSFUL: &str = "Login successful.";
pub const CREDENTIAL_STORE_UNAVAILABLE: &str = "Credential store unavailable.";

/// Result of a login attempt: whether it succeeded, plus a message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    fn accepted() -> Self {
        Self {
            success: true,
            message: Some(LOGIN_SUCCESSFUL.to_string()),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl From<LoginOutcome> for (bool, Option<String>) {
    fn from(outcome: LoginOutcome) -> Self {
        (outcome.success, outcome.message)
    }
}

#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: CredentialStore,
}

impl Authenticator {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }

    /// Checks a username/password pair.
    /// Never fails outright: every problem, an unreadable store included,
    /// comes back as an unsuccessful outcome.
    pub fn authenticate(&self, username: &str, password: &str) -> LoginOutcome {
        match self.try_authenticate(username, password) {
            Ok(()) => {
                info!("Login accepted for {:?}", username);
                LoginOutcome::accepted()
            }
            Err(Error::StorageUnavailable(reason)) => {
                warn!("Login for {:?} failed, credential store unavailable: {}", username, reason);
                LoginOutcome::rejected(CREDENTIAL_STORE_UNAVAILABLE)
            }
            Err(err) => {
                info!("Login rejected for {:?}: {:?}", username, err);
                LoginOutcome::rejected(err.to_string())
            }
        }
    }

    /// Like [`authenticate`](Self::authenticate), but returns the reason for a rejection.
    /// Empty input is rejected before the store is opened.
    pub fn try_authenticate(&self, username: &str, password: &str) -> Result<(), Error> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::EmptyField);
        }
        let record = self.credentials.find(username)?;
        if record.password != password {
            return Err(Error::InvalidPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::Medium;

    const SAMPLE: &str = "username,password\njohndoe,secure123\njanedoe,abc123\n";

    fn authenticator(text: &str) -> Authenticator {
        Authenticator::new(CredentialStore::new(Medium::memory(text)))
    }

    #[test]
    fn test_login() {
        let auth = authenticator(SAMPLE);
        assert!(auth.authenticate("johndoe", "secure123").success);
        assert!(!auth.authenticate("johndoe", "wrongpassword").success);
        assert!(!auth.authenticate("nonexistent", "nopass").success);
    }

    #[test]
    fn test_login_messages() {
        let auth = authenticator(SAMPLE);
        assert_eq!(
            auth.authenticate("janedoe", "abc123").message.as_deref(),
            Some("Login successful.")
        );
        assert_eq!(
            auth.authenticate("janedoe", "abc").message.as_deref(),
            Some("Incorrect password.")
        );
        assert_eq!(
            auth.authenticate("nobody", "abc").message.as_deref(),
            Some("User not found.")
        );
        assert_eq!(
            auth.authenticate("", "abc").message.as_deref(),
            Some("Username and password are required.")
        );
    }

    #[test]
    fn test_login_empty_fields() {
        let auth = authenticator(SAMPLE);
        assert!(!auth.authenticate("", "secure123").success);
        assert!(!auth.authenticate("johndoe", "").success);
        assert!(!auth.authenticate("", "").success);
    }

    #[test]
    fn test_empty_fields_skip_the_store() {
        // An unreadable store would report StorageUnavailable if it were opened.
        let auth = Authenticator::new(CredentialStore::new(Medium::file(
            "data/does_not_exist.csv",
        )));
        assert!(matches!(
            auth.try_authenticate("", "secure123"),
            Err(Error::EmptyField)
        ));
        assert!(matches!(
            auth.try_authenticate("johndoe", ""),
            Err(Error::EmptyField)
        ));
    }

    #[test]
    fn test_login_missing_file() {
        let auth = Authenticator::new(CredentialStore::new(Medium::file(
            "data/does_not_exist.csv",
        )));
        let outcome = auth.authenticate("johndoe", "secure123");
        assert!(!outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Credential store unavailable.")
        );
        assert!(matches!(
            auth.try_authenticate("johndoe", "secure123"),
            Err(Error::StorageUnavailable(_))
        ));
    }

    #[test]
    fn test_login_password_is_exact() {
        let auth = authenticator(SAMPLE);
        assert!(!auth.authenticate("johndoe", "Secure123").success);
        assert!(!auth.authenticate("johndoe", "secure123 ").success);
        assert!(matches!(
            auth.try_authenticate("johndoe", "secure12"),
            Err(Error::InvalidPassword)
        ));
    }

    #[test]
    fn test_login_from_file() {
        let auth = Authenticator::new(CredentialStore::new(Medium::file("data/credentials.csv")));
        assert!(auth.authenticate("johndoe", "secure123").success);
        assert!(auth.authenticate("janedoe", "abc123").success);
        assert!(!auth.authenticate("janedoe", "secure123").success);
    }

    #[test]
    fn test_outcome_into_tuple() {
        let (success, message): (bool, Option<String>) =
            authenticator(SAMPLE).authenticate("johndoe", "secure123").into();
        assert!(success);
        assert_eq!(message.as_deref(), Some("Login successful."));
    }
}
