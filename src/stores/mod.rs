//! Storage layer for the bank demo. Provides readers for:
//! - Account balances ([`AccountsStore`])
//! - Login credentials ([`CredentialStore`])
//! - A prebuilt username index over the balances ([`AccountIndex`])
//!
//! Every store reads through a [`Medium`](crate::Medium) and re-reads it
//! on each call; nothing is kept in memory between calls.

mod accounts;
mod credentials;
mod index;

pub use accounts::AccountsStore;
pub use credentials::CredentialStore;
pub use index::AccountIndex;
