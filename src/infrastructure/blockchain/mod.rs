//! # Blockchain Clients
//!
//! Clients for submitting transfers to Celo networks.
//!
//! ## Available Components
//!
//! - [`BlockchainClient`]: Trait for blockchain interactions
//! - [`CeloClient`]: ethers-rs implementation for Celo
//! - [`Cip64Transaction`]: Fee currency transaction envelope
//! - [`ChainId`]: Supported Celo networks
//!
//! ## Supported Transaction Types
//!
//! - Legacy (`0x00`)
//! - EIP-1559 dynamic fee (`0x02`)
//! - CIP-64 fee currency (`0x7b`)

pub mod celo;
pub mod cip64;
pub mod client;

pub use celo::{CeloClient, ReceiptPolling};
pub use cip64::{CIP64_TX_TYPE, Cip64Transaction};
pub use client::{BlockchainClient, BlockchainError, BlockchainResult, ChainId, TxHash};
