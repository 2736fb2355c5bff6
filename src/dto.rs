use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::Error;

/// One row of the accounts file. Balances are kept exactly as persisted
/// and parsed on demand with [`AccountRecord::balance`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    pub username: String,
    pub password: String,
    pub cheque_account_balance: String,
    pub savings_account_balance: String,
    pub investment_account_balance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Cheque,
    Savings,
    Investment,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [
        AccountKind::Cheque,
        AccountKind::Savings,
        AccountKind::Investment,
    ];
}

impl AccountRecord {
    /// Returns a field by its header name, or `None` for an unknown name.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "username" => Some(&self.username),
            "password" => Some(&self.password),
            "cheque_account_balance" => Some(&self.cheque_account_balance),
            "savings_account_balance" => Some(&self.savings_account_balance),
            "investment_account_balance" => Some(&self.investment_account_balance),
            _ => None,
        }
    }

    pub fn raw_balance(&self, kind: AccountKind) -> &str {
        match kind {
            AccountKind::Cheque => &self.cheque_account_balance,
            AccountKind::Savings => &self.savings_account_balance,
            AccountKind::Investment => &self.investment_account_balance,
        }
    }

    pub fn balance(&self, kind: AccountKind) -> Result<Decimal, Error> {
        let raw = self.raw_balance(kind);
        raw.trim()
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidBalance(raw.to_string()))
    }

    /// Sum of the three balances. A sum that does not fit in a `Decimal`
    /// is an [`Error::BalanceOverflow`].
    pub fn total_balance(&self) -> Result<Decimal, Error> {
        AccountKind::ALL.iter().try_fold(Decimal::ZERO, |total, kind| {
            total
                .checked_add(self.balance(*kind)?)
                .ok_or_else(|| Error::BalanceOverflow(self.username.clone()))
        })
    }
}

/// Field access by header name, e.g. `record["cheque_account_balance"]`.
///
/// # Panics
/// Panics if `field` is not one of the account header names.
impl<'a> Index<&'a str> for AccountRecord {
    type Output = str;

    fn index(&self, field: &'a str) -> &str {
        match self.get(field) {
            Some(value) => value,
            None => panic!("no account field named {:?}", field),
        }
    }
}

/// One row of the credentials file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
}

/// Parsed balances of a single user, as printed by the `lookup` command.
#[derive(Debug, Serialize, PartialEq)]
pub struct BalanceRow {
    pub username: String,
    pub cheque: Decimal,
    pub savings: Decimal,
    pub investment: Decimal,
    pub total: Decimal,
}

impl TryFrom<&AccountRecord> for BalanceRow {
    type Error = Error;

    fn try_from(record: &AccountRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            username: record.username.clone(),
            cheque: record.balance(AccountKind::Cheque)?,
            savings: record.balance(AccountKind::Savings)?,
            investment: record.balance(AccountKind::Investment)?,
            total: record.total_balance()?,
        })
    }
}
