//! # celo-tx-types
//!
//! Demonstrates the three transaction types accepted by Celo networks by
//! sending a small CELO transfer with each of them:
//!
//! | Type | Name | Fee fields |
//! |------|------|------------|
//! | `0x00` | Legacy | `gasPrice` |
//! | `0x02` | Dynamic fee (EIP-1559) | `maxFeePerGas`, `maxPriorityFeePerGas` |
//! | `0x7b` | Fee currency (CIP-64) | `feeCurrency`, `maxFeePerGas`, `maxPriorityFeePerGas` |
//!
//! ## Layers
//!
//! - [`domain`]: Fee modes, transfer requests and receipt projection
//! - [`application`]: Demo routines, sequential runner, errors
//! - [`infrastructure`]: ethers-rs client and CIP-64 encoding
//! - [`config`](crate::config): Layered configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
