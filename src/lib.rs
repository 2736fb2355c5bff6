mod auth;
mod config;
mod csv_utils;
mod dto;
mod error;
mod medium;
mod signup;
mod stores;

pub use auth::{Authenticator, LoginOutcome};
pub use self::config::TellerConfig;
pub use csv_utils::{read_csv, write_csv};
pub use dto::{AccountKind, AccountRecord, BalanceRow, CredentialRecord};
pub use error::Error;
pub use medium::Medium;
pub use signup::{Registrar, REGISTRATION_SUCCESSFUL};
pub use stores::{AccountIndex, AccountsStore, CredentialStore};
