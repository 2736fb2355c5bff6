//! Non-interactive sign-up: validates a new username/password pair and
//! appends it to the credential store.

use log::info;

use crate::dto::CredentialRecord;
use crate::stores::CredentialStore;
use crate::Error;

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful. You can now log in.";

#[derive(Debug, Clone)]
pub struct Registrar {
    credentials: CredentialStore,
}

impl Registrar {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }

    /// Registers `username` with `password`. `confirmation` must repeat the password.
    /// Nothing is written unless every check passes.
    pub fn register(&self, username: &str, password: &str, confirmation: &str) -> Result<(), Error> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::EmptyField);
        }
        if username.contains([',', '"', '\r', '\n']) {
            return Err(Error::InvalidUsername);
        }
        if self.credentials.contains(username)? {
            return Err(Error::UserExists);
        }
        if password != confirmation {
            return Err(Error::PasswordMismatch);
        }

        self.credentials.append(&CredentialRecord {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        info!("Registered new user {:?}", username);
        Ok(())
    }
}
