//! # Transaction Demos
//!
//! One routine per fee mode. Each prints a status line, submits a 0.01 CELO
//! transfer, waits for the receipt and prints its summary.
//!
//! Recipient, value and fees are fixed testnet values.

use crate::application::context::DemoContext;
use crate::application::error::ApplicationResult;
use crate::application::report::print_receipt;
use crate::domain::value_objects::fee_mode::WEI_PER_CELO;
use crate::domain::value_objects::{FeeMode, ReceiptSummary, TransferRequest, TxType, gwei};
use ethers::types::{Address, H160};
use std::fmt;
use std::io::Write;
use tracing::info;

/// Recipient of every demo transfer (`0x70997970c51812dc3a010c7d01b50e0d17dc79c8`).
pub const DEMO_RECIPIENT: Address = H160([
    0x70, 0x99, 0x79, 0x70, 0xc5, 0x18, 0x12, 0xdc, 0x3a, 0x01, 0x0c, 0x7d, 0x01, 0xb5, 0x0e, 0x0d,
    0x17, 0xdc, 0x79, 0xc8,
]);

/// cUSD on Alfajores (`0x874069Fa1Eb16D44d622F2e0Ca25eeA172369bC1`).
pub const CUSD_FEE_CURRENCY: Address = H160([
    0x87, 0x40, 0x69, 0xfa, 0x1e, 0xb1, 0x6d, 0x44, 0xd6, 0x22, 0xf2, 0xe0, 0xca, 0x25, 0xee, 0xa1,
    0x72, 0x36, 0x9b, 0xc1,
]);

/// Value of every demo transfer: 0.01 CELO.
pub const DEMO_VALUE: u128 = WEI_PER_CELO / 100;

/// Gas price of the legacy transfer.
pub const LEGACY_GAS_PRICE: u64 = gwei(20);

/// Max fee per gas of the dynamic fee transfers.
pub const MAX_FEE_PER_GAS: u64 = gwei(10);

/// Max priority fee per gas of the dynamic fee transfers.
pub const MAX_PRIORITY_FEE_PER_GAS: u64 = gwei(10);

/// A single transaction type demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    /// Type 0x00, flat gas price.
    Legacy,
    /// Type 0x02, EIP-1559 fees in CELO.
    DynamicFee,
    /// Type 0x7b, EIP-1559 fees paid in cUSD.
    FeeCurrency,
}

impl Demo {
    /// Every demo, in the order they run.
    pub const ALL: [Self; 3] = [Self::Legacy, Self::DynamicFee, Self::FeeCurrency];

    /// Returns the fee fields this demo sends.
    #[must_use]
    pub const fn fees(self) -> FeeMode {
        match self {
            Self::Legacy => FeeMode::legacy(LEGACY_GAS_PRICE),
            Self::DynamicFee => FeeMode::dynamic_fee(MAX_FEE_PER_GAS, MAX_PRIORITY_FEE_PER_GAS),
            // fees are denominated in the fee currency
            Self::FeeCurrency => FeeMode::fee_currency(
                CUSD_FEE_CURRENCY,
                MAX_FEE_PER_GAS,
                MAX_PRIORITY_FEE_PER_GAS,
            ),
        }
    }

    /// Returns the envelope type this demo produces.
    #[must_use]
    pub const fn tx_type(self) -> TxType {
        self.fees().tx_type()
    }

    /// Builds the transfer sent by this demo.
    #[must_use]
    pub fn build_request(self, context: &DemoContext) -> TransferRequest {
        TransferRequest::new(context.account(), DEMO_RECIPIENT, DEMO_VALUE, self.fees())
    }

    /// Submits the transfer, waits for inclusion and prints the receipt.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged if submission or waiting fails,
    /// or an output error if writing to `out` fails.
    pub async fn execute<W: Write + Send>(
        self,
        context: &DemoContext,
        out: &mut W,
    ) -> ApplicationResult<ReceiptSummary> {
        writeln!(out, "Initiating {} transaction...", self)?;

        let request = self.build_request(context);
        info!(demo = %self, tx_type = %request.tx_type(), fees = %request.fees(), "submitting transaction");
        let tx_hash = context.client().send_transaction(&request).await?;

        info!(demo = %self, tx_hash = %tx_hash, "waiting for receipt");
        let receipt = context.client().wait_for_receipt(&tx_hash).await?;

        let summary = print_receipt(out, &receipt)?;
        info!(demo = %self, tx_hash = %tx_hash, status = %summary.status, "transaction included");
        Ok(summary)
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tx_type().label())
    }
}
