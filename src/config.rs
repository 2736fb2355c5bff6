//! Configuration: which files the stores read.
//!
//! Sources, lowest priority first:
//! - built-in defaults (`accounts.csv`, `credentials.csv` in the working directory)
//! - an optional TOML file (`teller.toml` by default)
//! - environment variables `TELLER_ACCOUNTS_PATH` and `TELLER_CREDENTIALS_PATH`

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::medium::Medium;
use crate::stores::{AccountsStore, CredentialStore};

pub const DEFAULT_CONFIG_FILE: &str = "teller";
pub const ENV_PREFIX: &str = "TELLER";
pub const DEFAULT_ACCOUNTS_PATH: &str = "accounts.csv";
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.csv";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TellerConfig {
    /// Balances file: `username,password,cheque_account_balance,savings_account_balance,investment_account_balance`
    pub accounts_path: PathBuf,
    /// Login file: `username,password`
    pub credentials_path: PathBuf,
}

impl TellerConfig {
    /// Load configuration from `teller.toml` (if present) with environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the named file (extension optional, file optional).
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        Self::load_with_prefix(name, ENV_PREFIX)
    }

    /// Like [`load_from`](Self::load_from), reading overrides from `<env_prefix>_ACCOUNTS_PATH`
    /// and `<env_prefix>_CREDENTIALS_PATH`. Keys stay flat: no separator splits them.
    pub fn load_with_prefix(name: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("accounts_path", DEFAULT_ACCOUNTS_PATH)?
            .set_default("credentials_path", DEFAULT_CREDENTIALS_PATH)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        let config: TellerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.accounts_path.as_os_str().is_empty() {
            return Err(ConfigError::Message("accounts_path cannot be empty".into()));
        }
        if self.credentials_path.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "credentials_path cannot be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn accounts(&self) -> AccountsStore {
        AccountsStore::new(Medium::file(&self.accounts_path))
    }

    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(Medium::file(&self.credentials_path))
    }
}
