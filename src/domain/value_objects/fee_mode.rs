//! # Fee Modes
//!
//! Fee payment modes for Celo transactions.
//!
//! Supports legacy gas pricing, EIP-1559 dynamic fees paid in CELO, and
//! CIP-64 dynamic fees paid in an alternate fee currency.

use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wei per gwei.
pub const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Wei per CELO (18 decimals).
pub const WEI_PER_CELO: u128 = 1_000_000_000_000_000_000;

/// Converts a whole number of gwei to wei.
///
/// # Examples
///
/// ```
/// use celo_tx_types::domain::value_objects::fee_mode::gwei;
///
/// assert_eq!(gwei(20), 20_000_000_000);
/// ```
#[inline]
#[must_use]
pub const fn gwei(amount: u64) -> u64 {
    amount.saturating_mul(WEI_PER_GWEI)
}

/// Transaction envelope type on Celo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TxType {
    /// Ethereum legacy transaction (0x00).
    Legacy = 0x00,
    /// EIP-1559 dynamic fee transaction (0x02).
    DynamicFee = 0x02,
    /// CIP-64 dynamic fee transaction with a custom fee currency (0x7b).
    FeeCurrency = 0x7b,
}

impl TxType {
    /// Returns the envelope type byte.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human readable name used in status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::DynamicFee => "dynamic fee (EIP-1559)",
            Self::FeeCurrency => "custom fee currency",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.as_u8())
    }
}

/// Fee fields of a transaction request.
///
/// Each variant carries exactly the fields its envelope type needs.
/// Fees are stored as u64 wei, which covers every practical gas price.
///
/// Serialised untagged, so a request flattening this enum only gains the
/// variant's own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeeMode {
    /// Flat gas price.
    #[serde(rename_all = "camelCase")]
    Legacy {
        /// Gas price in wei.
        gas_price: u64,
    },
    /// EIP-1559 fees denominated in CELO.
    #[serde(rename_all = "camelCase")]
    DynamicFee {
        /// Maximum total fee per gas in wei.
        max_fee_per_gas: u64,
        /// Maximum priority fee per gas in wei.
        max_priority_fee_per_gas: u64,
    },
    /// EIP-1559 style fees denominated in, and paid with, an ERC-20 token.
    #[serde(rename_all = "camelCase")]
    FeeCurrency {
        /// Token the fee is paid in.
        fee_currency: Address,
        /// Maximum total fee per gas, in fee currency units.
        max_fee_per_gas: u64,
        /// Maximum priority fee per gas, in fee currency units.
        max_priority_fee_per_gas: u64,
    },
}

impl FeeMode {
    /// Creates a legacy fee mode.
    #[must_use]
    pub const fn legacy(gas_price: u64) -> Self {
        Self::Legacy { gas_price }
    }

    /// Creates an EIP-1559 fee mode.
    #[must_use]
    pub const fn dynamic_fee(max_fee_per_gas: u64, max_priority_fee_per_gas: u64) -> Self {
        Self::DynamicFee {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        }
    }

    /// Creates a CIP-64 fee currency mode.
    #[must_use]
    pub const fn fee_currency(
        fee_currency: Address,
        max_fee_per_gas: u64,
        max_priority_fee_per_gas: u64,
    ) -> Self {
        Self::FeeCurrency {
            fee_currency,
            max_fee_per_gas,
            max_priority_fee_per_gas,
        }
    }

    /// Returns the envelope type this fee mode produces.
    #[must_use]
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Legacy { .. } => TxType::Legacy,
            Self::DynamicFee { .. } => TxType::DynamicFee,
            Self::FeeCurrency { .. } => TxType::FeeCurrency,
        }
    }
}

impl fmt::Display for FeeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy { gas_price } => write!(f, "legacy: {} wei", gas_price),
            Self::DynamicFee {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => write!(
                f,
                "eip1559: max_fee={} wei, priority_fee={} wei",
                max_fee_per_gas, max_priority_fee_per_gas
            ),
            Self::FeeCurrency {
                fee_currency,
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => write!(
                f,
                "cip64: fee_currency={:#x}, max_fee={}, priority_fee={}",
                fee_currency, max_fee_per_gas, max_priority_fee_per_gas
            ),
        }
    }
}
