//! # Demo Context
//!
//! The signing identity and network client shared by every demo.
//!
//! Built once at startup and passed by reference; nothing in it changes for
//! the lifetime of the process.

use crate::application::error::ApplicationResult;
use crate::config::DemoConfig;
use crate::infrastructure::blockchain::{BlockchainClient, BlockchainError, CeloClient};
use ethers::signers::LocalWallet;
use ethers::types::Address;
use std::sync::Arc;
use tracing::info;

/// Read-only state shared by the demos.
#[derive(Debug, Clone)]
pub struct DemoContext {
    account: Address,
    client: Arc<dyn BlockchainClient>,
}

impl DemoContext {
    /// Creates a context around an existing client.
    ///
    /// The client's account becomes the sender of every demo transaction.
    #[must_use]
    pub fn new(client: Arc<dyn BlockchainClient>) -> Self {
        Self {
            account: client.account(),
            client,
        }
    }

    /// Derives the signing identity and builds a [`CeloClient`].
    ///
    /// Does not contact the network.
    ///
    /// # Errors
    ///
    /// Returns a signing error if the private key is malformed, or a
    /// connection error if the RPC URL is invalid.
    pub fn bootstrap(config: &DemoConfig) -> ApplicationResult<Self> {
        let wallet: LocalWallet = config
            .private_key()
            .parse()
            .map_err(|e| BlockchainError::signing(format!("invalid private key: {}", e)))?;

        let client = CeloClient::new(config.chain(), config.rpc_url(), wallet, config.polling())?;
        info!(
            account = ?client.account(),
            chain = %config.chain(),
            rpc_url = config.rpc_url(),
            "client ready"
        );

        Ok(Self::new(Arc::new(client)))
    }

    /// Returns the sender address.
    #[inline]
    #[must_use]
    pub fn account(&self) -> Address {
        self.account
    }

    /// Returns the blockchain client.
    #[inline]
    #[must_use]
    pub fn client(&self) -> &dyn BlockchainClient {
        self.client.as_ref()
    }
}
