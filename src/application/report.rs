//! # Receipt Output
//!
//! Prints the reduced receipt after each demo, and the single line reported
//! when a run fails.

use crate::application::error::ApplicationResult;
use crate::domain::value_objects::{ReceiptSummary, TransactionReceipt};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Label printed in front of every receipt summary.
pub const RECEIPT_LABEL: &str = "Transaction details:";

/// Prefix of the line printed when a run fails.
pub const FAILURE_PREFIX: &str = "An error occurred:";

/// Projects `receipt` and writes it to `out`, followed by a blank line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_receipt<W: Write>(
    out: &mut W,
    receipt: &TransactionReceipt,
) -> ApplicationResult<ReceiptSummary> {
    let summary = ReceiptSummary::from_receipt(receipt);
    let rendered = serde_json::to_string_pretty(&summary)?;
    writeln!(out, "{} {}\n", RECEIPT_LABEL, rendered)?;
    Ok(summary)
}

/// Writes the one console line for a failed run.
///
/// The error is also recorded at debug level so it is not shown twice with
/// the default filter.
pub fn print_failure<W: Write>(out: &mut W, err: &dyn fmt::Display) {
    debug!(error = %err, "run failed");
    // nothing left to report to if the console is gone
    let _ = writeln!(out, "{} {}", FAILURE_PREFIX, err);
}
