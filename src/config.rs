//! Environment-derived configuration.
//!
//! The service authenticates to its managed backends with static bearer
//! tokens taken from the environment. There is no session layer of its own.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

use crate::revenue::domain::RevenueAccount;

/// Default Dropbox root prefix when `DROPBOX_ROOT_PATH` is unset.
pub const DEFAULT_DROPBOX_ROOT: &str = "/clawd";

/// Default bind address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the PostgREST-style table API.
#[derive(Debug, Clone)]
pub struct PostgrestConfig {
    /// Base URL of the backend, without the `/rest/v1` suffix.
    pub base_url: String,
    /// Service key sent as both `apikey` and bearer token.
    pub service_key: String,
}

/// Connection settings for the Dropbox content API.
#[derive(Debug, Clone)]
pub struct DropboxConfig {
    /// Long-lived access token.
    pub access_token: String,
    /// Root prefix all file operations are confined to.
    pub root_path: String,
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgREST backend settings.
    pub postgrest: PostgrestConfig,
    /// Dropbox backend settings.
    pub dropbox: DropboxConfig,
    /// Stripe API keys, one per configured revenue account.
    pub stripe_keys: HashMap<RevenueAccount, String>,
    /// Address the HTTP surface binds to.
    pub bind_addr: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// A revenue account is configured if and only if its Stripe key
    /// variable is set; the accounts themselves are fixed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a required variable is
    /// absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let postgrest = PostgrestConfig {
            base_url: required_var("SUPABASE_URL")?,
            service_key: required_var("SUPABASE_SERVICE_KEY")?,
        };
        let dropbox = DropboxConfig {
            access_token: required_var("DROPBOX_ACCESS_TOKEN")?,
            root_path: optional_var("DROPBOX_ROOT_PATH")
                .unwrap_or_else(|| DEFAULT_DROPBOX_ROOT.to_owned()),
        };

        let mut stripe_keys = HashMap::new();
        for account in RevenueAccount::ALL {
            if let Some(key) = optional_var(account.key_var()) {
                stripe_keys.insert(account, key);
            }
        }

        Ok(Self {
            postgrest,
            dropbox,
            stripe_keys,
            bind_addr: optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::MissingVar(name))
}
