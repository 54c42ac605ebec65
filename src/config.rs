//! # Demo Configuration
//!
//! Settings for the demo run, layered from (lowest to highest priority):
//!
//! 1. Built-in defaults
//! 2. An optional config file (TOML, YAML or JSON)
//! 3. `CELO_DEMO_*` environment variables
//! 4. `PRIVATE_KEY` and command-line overrides
//!
//! # Examples
//!
//! ```
//! use celo_tx_types::config::DemoConfig;
//! use celo_tx_types::infrastructure::blockchain::ChainId;
//!
//! let config = DemoConfig::new("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
//!     .with_chain(ChainId::Alfajores);
//! assert_eq!(config.rpc_url(), "https://alfajores-forno.celo-testnet.org");
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::infrastructure::blockchain::{ChainId, ReceiptPolling};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// Prefix of the remaining environment variables.
pub const ENV_PREFIX: &str = "CELO_DEMO";

/// Default receipt polling interval in milliseconds.
const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u64 = 4_000;

/// Default receipt timeout in milliseconds.
const DEFAULT_RECEIPT_TIMEOUT_MS: u64 = 180_000;

/// Configuration for a demo run.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// Hex-encoded secp256k1 key, with or without `0x`.
    private_key: String,
    /// Network to send to.
    #[serde(default)]
    chain: ChainId,
    /// RPC endpoint; the chain's public endpoint when unset.
    #[serde(default)]
    rpc_url: Option<String>,
    /// Delay between receipt polls in milliseconds.
    #[serde(default = "default_receipt_poll_interval_ms")]
    receipt_poll_interval_ms: u64,
    /// Maximum wait for a receipt in milliseconds.
    #[serde(default = "default_receipt_timeout_ms")]
    receipt_timeout_ms: u64,
}

fn default_receipt_poll_interval_ms() -> u64 {
    DEFAULT_RECEIPT_POLL_INTERVAL_MS
}

fn default_receipt_timeout_ms() -> u64 {
    DEFAULT_RECEIPT_TIMEOUT_MS
}

impl DemoConfig {
    /// Creates a configuration with defaults and the given key.
    #[must_use]
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            chain: ChainId::default(),
            rpc_url: None,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
            receipt_timeout_ms: DEFAULT_RECEIPT_TIMEOUT_MS,
        }
    }

    /// Loads the configuration from the environment and an optional file.
    ///
    /// # Arguments
    ///
    /// * `file` - Optional config file path
    /// * `rpc_url` - Optional RPC URL override
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or `PRIVATE_KEY` is missing.
    pub fn load(file: Option<&Path>, rpc_url: Option<String>) -> ApplicationResult<Self> {
        Self::load_with_key(file, rpc_url, std::env::var(PRIVATE_KEY_VAR).ok())
    }

    /// Loads the configuration with an explicit signing key override in place
    /// of `PRIVATE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a source cannot be read
    /// or no source provides a key.
    pub fn load_with_key(
        file: Option<&Path>,
        rpc_url: Option<String>,
        private_key: Option<String>,
    ) -> ApplicationResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("private_key", private_key)
            .and_then(|builder| builder.set_override_option("rpc_url", rpc_url))
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ApplicationError::configuration(e.to_string()))
    }

    /// Sets the chain.
    #[must_use]
    pub fn with_chain(mut self, chain: ChainId) -> Self {
        self.chain = chain;
        self
    }

    /// Sets the RPC endpoint.
    #[must_use]
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Returns the signing key.
    #[inline]
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Returns the chain.
    #[inline]
    #[must_use]
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Returns the RPC endpoint, falling back to the chain default.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.chain.default_rpc_url())
    }

    /// Returns the receipt polling settings.
    #[must_use]
    pub fn polling(&self) -> ReceiptPolling {
        ReceiptPolling::new(
            Duration::from_millis(self.receipt_poll_interval_ms),
            Duration::from_millis(self.receipt_timeout_ms),
        )
    }
}

impl fmt::Debug for DemoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoConfig")
            .field("private_key", &"<redacted>")
            .field("chain", &self.chain)
            .field("rpc_url", &self.rpc_url())
            .field("receipt_poll_interval_ms", &self.receipt_poll_interval_ms)
            .field("receipt_timeout_ms", &self.receipt_timeout_ms)
            .finish()
    }
}
