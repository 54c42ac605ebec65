//! # Value Objects
//!
//! Immutable types describing what is sent and what comes back.
//!
//! ## Requests
//!
//! - [`FeeMode`]: Legacy, EIP-1559 or CIP-64 fee fields
//! - [`TxType`]: Envelope type byte produced by a fee mode
//! - [`TransferRequest`]: Sender, recipient, value and fee mode
//!
//! ## Receipts
//!
//! - [`TransactionReceipt`]: Raw receipt as reported by the node
//! - [`ReceiptSummary`]: Five-field projection printed by the demos

pub mod fee_mode;
pub mod receipt;
pub mod transfer_request;

pub use fee_mode::{FeeMode, TxType, gwei};
pub use receipt::{ReceiptSummary, TransactionReceipt};
pub use transfer_request::TransferRequest;
