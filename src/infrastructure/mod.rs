//! # Infrastructure Layer
//!
//! Adapters for the outside world.
//!
//! - `blockchain`: Celo JSON-RPC client and transaction encoding

pub mod blockchain;
