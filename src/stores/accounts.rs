use log::{debug, warn};

use crate::csv_utils::read_records;
use crate::dto::AccountRecord;
use crate::medium::Medium;
use crate::Error;

/// Reads account records from the balances file.
///
/// Nothing is cached: every lookup opens the medium, scans it and closes it
/// again, so edits to the file are visible on the next call.
#[derive(Debug, Clone)]
pub struct AccountsStore {
    medium: Medium,
}

impl AccountsStore {
    pub fn new(medium: Medium) -> Self {
        Self { medium }
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    /// Returns the first account whose username equals `username` exactly.
    /// Any failure, including a missing or unreadable file, yields `None`.
    pub fn lookup_account(&self, username: &str) -> Option<AccountRecord> {
        self.find_account(username).ok()
    }

    /// Like [`lookup_account`](Self::lookup_account), but tells a missing user
    /// ([`Error::AccountNotFound`]) apart from an unreadable medium
    /// ([`Error::StorageUnavailable`]).
    pub fn find_account(&self, username: &str) -> Result<AccountRecord, Error> {
        if username.is_empty() {
            return Err(Error::AccountNotFound);
        }
        debug!("Looking up account {:?} in {}", username, self.medium);

        let reader = self.medium.open().map_err(|err| {
            warn!("Cannot open accounts file {}: {}", self.medium, err);
            Error::from(err)
        })?;
        for record in read_records::<AccountRecord, _>(reader) {
            let record = record?;
            if record.username == username {
                return Ok(record);
            }
        }
        Err(Error::AccountNotFound)
    }

    /// Reads every well-formed account record, in file order.
    pub fn records(&self) -> Result<Vec<AccountRecord>, Error> {
        let reader = self.medium.open()?;
        read_records::<AccountRecord, _>(reader)
            .collect::<csv::Result<Vec<_>>>()
            .map_err(Error::from)
    }
}
