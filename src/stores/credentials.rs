//! Username/password storage backing login and sign-up.
//!
//! Kept apart from the accounts file: this medium only has the
//! `username,password` columns. Passwords are stored and compared in clear text.

use log::{debug, info, warn};
use std::iter;

use crate::csv_utils::{append_csv, read_records};
use crate::dto::CredentialRecord;
use crate::medium::Medium;
use crate::Error;

#[derive(Debug, Clone)]
pub struct CredentialStore {
    medium: Medium,
}

impl CredentialStore {
    pub fn new(medium: Medium) -> Self {
        Self { medium }
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    /// Scans the credentials file for the first row with this exact username.
    pub fn find(&self, username: &str) -> Result<CredentialRecord, Error> {
        debug!("Looking up credentials for {:?} in {}", username, self.medium);
        let reader = self.medium.open().map_err(|err| {
            warn!("Cannot open credentials file {}: {}", self.medium, err);
            Error::from(err)
        })?;
        for record in read_records::<CredentialRecord, _>(reader) {
            let record = record?;
            if record.username == username {
                return Ok(record);
            }
        }
        Err(Error::UserNotFound)
    }

    /// Returns whether a user with this exact username exists.
    /// A missing credentials file holds no users.
    pub fn contains(&self, username: &str) -> Result<bool, Error> {
        match self.find(username) {
            Ok(_) => Ok(true),
            Err(Error::UserNotFound) => Ok(false),
            Err(Error::StorageUnavailable(_)) if !self.exists() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Appends one row, writing the header first if the file is new or empty.
    pub fn append(&self, record: &CredentialRecord) -> Result<(), Error> {
        let (file, is_empty) = self.medium.open_append()?;
        append_csv(file, iter::once(record), is_empty)?;
        info!("Stored credentials for {:?} in {}", record.username, self.medium);
        Ok(())
    }

    fn exists(&self) -> bool {
        match self.medium.path() {
            Some(path) => path.exists(),
            None => true,
        }
    }
}
