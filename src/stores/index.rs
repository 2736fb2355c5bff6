//! Hash-map lookup over the accounts file, for callers that query many
//! usernames against the same snapshot.
//!
//! The index is built once and never refreshed; it answers exactly what
//! [`AccountsStore::lookup_account`] would have answered at load time.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::AccountsStore;
use crate::dto::AccountRecord;
use crate::Error;

#[derive(Debug, Default)]
pub struct AccountIndex {
    accounts: HashMap<String, AccountRecord>,
}

impl AccountIndex {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Reads the whole store. The first record for a username wins.
    pub fn load(store: &AccountsStore) -> Result<Self, Error> {
        let mut index = Self::new();
        for record in store.records()? {
            index.insert(record);
        }
        Ok(index)
    }

    /// Adds a record unless its username is already indexed.
    /// Returns false when the record was shadowed by an earlier one.
    pub fn insert(&mut self, record: AccountRecord) -> bool {
        match self.accounts.entry(record.username.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, username: &str) -> Option<&AccountRecord> {
        if username.is_empty() {
            return None;
        }
        self.accounts.get(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccountRecord> {
        self.accounts.values()
    }
}
