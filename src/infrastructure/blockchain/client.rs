//! # Blockchain Client Trait
//!
//! Port definition for submitting transfers and reading receipts.
//!
//! This module defines the [`BlockchainClient`] trait that abstracts the
//! network so the demos can run against a mock.

use crate::domain::value_objects::{TransactionReceipt, TransferRequest};
use async_trait::async_trait;
use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Supported Celo networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    /// Celo mainnet (chain ID 42220).
    Mainnet,
    /// Alfajores testnet (chain ID 44787).
    #[default]
    Alfajores,
    /// Baklava testnet (chain ID 62320).
    Baklava,
}

impl ChainId {
    /// Returns the numeric chain ID.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        match self {
            Self::Mainnet => 42220,
            Self::Alfajores => 44787,
            Self::Baklava => 62320,
        }
    }

    /// Returns the chain name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Alfajores => "alfajores",
            Self::Baklava => "baklava",
        }
    }

    /// Returns the public Forno RPC endpoint for this chain.
    #[must_use]
    pub const fn default_rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://forno.celo.org",
            Self::Alfajores => "https://alfajores-forno.celo-testnet.org",
            Self::Baklava => "https://baklava-forno.celo-testnet.org",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transaction hash, `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    /// Creates a new transaction hash.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<H256> for TxHash {
    fn from(hash: H256) -> Self {
        Self(format!("{:#x}", hash))
    }
}

/// Error type for blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Transaction submission error.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// Key parsing or signing error.
    #[error("signing error: {0}")]
    Signing(String),

    /// Timeout waiting for a receipt.
    #[error("timeout: {0}")]
    Timeout(String),
}

impl BlockchainError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a transaction error.
    #[must_use]
    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }

    /// Creates a signing error.
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Trait for blockchain client operations.
///
/// One implementation holds both the read-only provider used for receipts
/// and the signing handle used for submission.
#[async_trait]
pub trait BlockchainClient: Send + Sync + fmt::Debug {
    /// Returns the chain ID this client is connected to.
    fn chain_id(&self) -> ChainId;

    /// Returns the address transactions are signed with.
    fn account(&self) -> Address;

    /// Signs and submits a transfer.
    ///
    /// # Arguments
    ///
    /// * `request` - The transfer to submit
    ///
    /// # Errors
    ///
    /// Returns an error if signing, gas estimation or submission fails.
    async fn send_transaction(&self, request: &TransferRequest) -> BlockchainResult<TxHash>;

    /// Waits until the transaction is included and returns its receipt.
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Transaction hash to wait for
    ///
    /// # Errors
    ///
    /// Returns an error if the RPC call fails or no receipt shows up in time.
    async fn wait_for_receipt(&self, tx_hash: &TxHash) -> BlockchainResult<TransactionReceipt>;
}
