//! Errors for the account and credential stores.
//!
//! Contains error variants for:
//! - Lookup misses (account or user not found)
//! - Credential checks (empty field, wrong password)
//! - Sign-up validation (invalid username, duplicate user, mismatched confirmation)
//! - Storage failures (medium missing or unreadable, read-only medium)
//!
//! The public `lookup_account`/`authenticate` surface collapses all of these
//! into absence or a failed login; the `find_*`/`try_*` variants expose them.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    AccountNotFound,
    BalanceOverflow(String),
    EmptyField,
    InvalidBalance(String),
    InvalidPassword,
    InvalidUsername,
    PasswordMismatch,
    ReadOnlyMedium,
    StorageUnavailable(String),
    UserExists,
    UserNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccountNotFound => write!(f, "Account not found."),
            Error::BalanceOverflow(username) => {
                write!(f, "Total balance of {:?} is out of range.", username)
            }
            Error::EmptyField => write!(f, "Username and password are required."),
            Error::InvalidBalance(value) => write!(f, "Invalid balance: {:?}", value),
            Error::InvalidPassword => write!(f, "Incorrect password."),
            Error::InvalidUsername => {
                write!(f, "Username may not contain commas, quotes or line breaks.")
            }
            Error::PasswordMismatch => write!(f, "Passwords do not match. Please try again."),
            Error::ReadOnlyMedium => write!(f, "Record medium is read-only."),
            Error::StorageUnavailable(reason) => write!(f, "Storage unavailable: {}", reason),
            Error::UserExists => write!(
                f,
                "This username already exists. Please choose a different one."
            ),
            Error::UserNotFound => write!(f, "User not found."),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StorageUnavailable(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::StorageUnavailable(err.to_string())
    }
}
