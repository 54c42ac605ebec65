//! # Transaction Receipts
//!
//! Raw receipts as returned by the node and the fixed projection printed by
//! the demos.
//!
//! Celo nodes attach extra fields to receipts (`feeCurrency`, `gatewayFee`,
//! ...), so the receipt is kept as untyped JSON and only projected at display
//! time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A transaction receipt, exactly as reported by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReceipt(Value);

impl TransactionReceipt {
    /// Wraps a raw JSON receipt.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Returns a field of the receipt, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the raw JSON receipt.
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

/// Reduced view of a receipt for display.
///
/// Always carries all five fields; a field missing from the source receipt
/// is `null`.
///
/// # Examples
///
/// ```
/// use celo_tx_types::domain::value_objects::{ReceiptSummary, TransactionReceipt};
/// use serde_json::json;
///
/// let receipt = TransactionReceipt::new(json!({
///     "type": "0x2",
///     "status": "0x1",
///     "transactionHash": "0xabc",
///     "from": "0x01",
///     "to": "0x02",
///     "gasUsed": "0x5208",
/// }));
/// let summary = ReceiptSummary::from_receipt(&receipt);
/// assert_eq!(summary.status, json!("success"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    /// Envelope type, as reported.
    #[serde(rename = "type")]
    pub tx_type: Value,
    /// `success`, `reverted`, or the reported value if neither.
    pub status: Value,
    /// Transaction hash.
    #[serde(rename = "transactionHash")]
    pub transaction_hash: Value,
    /// Sender.
    pub from: Value,
    /// Recipient, `null` for contract creation.
    pub to: Value,
}

impl ReceiptSummary {
    /// Projects a receipt onto the displayed fields.
    #[must_use]
    pub fn from_receipt(receipt: &TransactionReceipt) -> Self {
        let take = |name: &str| receipt.field(name).cloned().unwrap_or(Value::Null);

        Self {
            tx_type: take("type"),
            status: normalize_status(take("status")),
            transaction_hash: take("transactionHash"),
            from: take("from"),
            to: take("to"),
        }
    }

    /// Returns true if the receipt reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_str() == Some("success")
    }
}

fn normalize_status(status: Value) -> Value {
    match status.as_str() {
        Some("0x1") => Value::from("success"),
        Some("0x0") => Value::from("reverted"),
        _ => status,
    }
}
