//! # Transfer Request
//!
//! A native value transfer with a fee payment mode.

use super::fee_mode::{FeeMode, TxType};
use ethers::types::Address;
use serde::Serialize;

/// A value transfer ready to be signed and submitted.
///
/// Serialises to `from`, `to`, `value` plus exactly the fields of its
/// [`FeeMode`].
///
/// # Examples
///
/// ```
/// use celo_tx_types::domain::value_objects::{FeeMode, TransferRequest, TxType};
/// use ethers::types::Address;
///
/// let request = TransferRequest::new(
///     Address::repeat_byte(1),
///     Address::repeat_byte(2),
///     10_000_000_000_000_000,
///     FeeMode::legacy(20_000_000_000),
/// );
/// assert_eq!(request.tx_type(), TxType::Legacy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    from: Address,
    to: Address,
    value: u128,
    #[serde(flatten)]
    fees: FeeMode,
}

impl TransferRequest {
    /// Creates a new transfer request.
    #[must_use]
    pub const fn new(from: Address, to: Address, value: u128, fees: FeeMode) -> Self {
        Self {
            from,
            to,
            value,
            fees,
        }
    }

    /// Returns the sender.
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Address {
        self.from
    }

    /// Returns the recipient.
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Returns the value in wei.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Returns the fee mode.
    #[inline]
    #[must_use]
    pub const fn fees(&self) -> &FeeMode {
        &self.fees
    }

    /// Returns the envelope type this request will be sent as.
    #[must_use]
    pub const fn tx_type(&self) -> TxType {
        self.fees.tx_type()
    }
}
