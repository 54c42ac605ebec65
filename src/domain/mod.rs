//! # Domain Layer
//!
//! Transaction requests, fee modes and receipts, independent of any network
//! client.

pub mod value_objects;
