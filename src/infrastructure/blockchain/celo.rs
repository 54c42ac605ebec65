//! # Celo Client
//!
//! Celo client implementation using ethers-rs.
//!
//! Legacy and EIP-1559 transfers go through ethers' [`SignerMiddleware`],
//! which fills nonce, gas and chain ID before signing. CIP-64 transfers are
//! filled here and encoded with [`Cip64Transaction`].

use super::cip64::Cip64Transaction;
use super::client::{BlockchainClient, BlockchainError, BlockchainResult, ChainId, TxHash};
use crate::domain::value_objects::{FeeMode, TransactionReceipt, TransferRequest};
use async_trait::async_trait;
use ethers::prelude::*;
use ethers::providers::MiddlewareError;
use ethers::types::transaction::eip2718::TypedTransaction;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How receipts are polled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolling {
    /// Delay between `eth_getTransactionReceipt` calls.
    pub interval: Duration,
    /// Upper bound on the total wait.
    pub timeout: Duration,
}

impl ReceiptPolling {
    /// Default polling interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(4);

    /// Default wait timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

    /// Creates a polling configuration.
    #[must_use]
    pub const fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

impl Default for ReceiptPolling {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL, Self::DEFAULT_TIMEOUT)
    }
}

/// Maps a failed RPC call to a blockchain error.
///
/// A JSON-RPC error response means the node rejected the call; anything else
/// (refused connection, HTTP failure, undecodable reply) means it was never
/// reached.
fn rpc_failure<E: MiddlewareError>(context: &str, err: &E) -> BlockchainError {
    if err.as_error_response().is_some() {
        BlockchainError::transaction(format!("{}: {}", context, err))
    } else {
        BlockchainError::connection(format!("{}: {}", context, err))
    }
}

/// Celo client implementation using ethers-rs.
///
/// Holds a read-only provider for queries and receipts, and a signing
/// middleware bound to the demo account for submissions.
#[derive(Debug)]
pub struct CeloClient {
    /// The chain this client is connected to.
    chain_id: ChainId,
    /// Read-only RPC provider.
    provider: Arc<Provider<Http>>,
    /// Signing middleware over a clone of the provider.
    wallet: SignerMiddleware<Provider<Http>, LocalWallet>,
    /// Receipt polling settings.
    polling: ReceiptPolling,
}

impl CeloClient {
    /// Creates a new Celo client.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The chain to connect to
    /// * `rpc_url` - RPC endpoint URL
    /// * `wallet` - Signing identity; its chain ID is overridden with `chain_id`
    /// * `polling` - Receipt polling settings
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be created.
    pub fn new(
        chain_id: ChainId,
        rpc_url: &str,
        wallet: LocalWallet,
        polling: ReceiptPolling,
    ) -> BlockchainResult<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| BlockchainError::connection(e.to_string()))?;
        let signer = wallet.with_chain_id(chain_id.as_u64());

        Ok(Self {
            chain_id,
            wallet: SignerMiddleware::new(provider.clone(), signer),
            provider: Arc::new(provider),
            polling,
        })
    }

    async fn send_typed(&self, tx: TypedTransaction) -> BlockchainResult<TxHash> {
        let pending = self
            .wallet
            .send_transaction(tx, None)
            .await
            .map_err(|e| rpc_failure("submission failed", &e))?;

        Ok(TxHash::from(pending.tx_hash()))
    }

    /// Fills, signs and broadcasts a CIP-64 transfer.
    async fn send_fee_currency(
        &self,
        request: &TransferRequest,
        fee_currency: Address,
        max_fee_per_gas: u64,
        max_priority_fee_per_gas: u64,
    ) -> BlockchainResult<TxHash> {
        let nonce = self
            .provider
            .get_transaction_count(request.from(), Some(BlockNumber::Pending.into()))
            .await
            .map_err(|e| BlockchainError::connection(e.to_string()))?;

        let estimate_params = json!({
            "from": request.from(),
            "to": request.to(),
            "value": U256::from(request.value()),
            "feeCurrency": fee_currency,
            "maxFeePerGas": U256::from(max_fee_per_gas),
            "maxPriorityFeePerGas": U256::from(max_priority_fee_per_gas),
        });
        let gas: U256 = self
            .provider
            .request("eth_estimateGas", [estimate_params])
            .await
            .map_err(|e| rpc_failure("gas estimation failed", &e))?;

        let tx = Cip64Transaction {
            chain_id: self.chain_id.as_u64(),
            nonce,
            max_priority_fee_per_gas: U256::from(max_priority_fee_per_gas),
            max_fee_per_gas: U256::from(max_fee_per_gas),
            gas,
            to: request.to(),
            value: U256::from(request.value()),
            data: Bytes::default(),
            fee_currency,
        };
        let raw = tx.sign(self.wallet.signer())?;

        let pending = self
            .provider
            .send_raw_transaction(raw)
            .await
            .map_err(|e| rpc_failure("submission failed", &e))?;

        Ok(TxHash::from(pending.tx_hash()))
    }

    async fn poll_receipt(&self, tx_hash: &TxHash) -> BlockchainResult<TransactionReceipt> {
        loop {
            let receipt: Option<Value> = self
                .provider
                .request("eth_getTransactionReceipt", [tx_hash.as_str()])
                .await
                .map_err(|e| BlockchainError::connection(e.to_string()))?;

            match receipt {
                Some(raw) if !raw.is_null() => return Ok(TransactionReceipt::new(raw)),
                _ => {
                    debug!(tx_hash = %tx_hash, "receipt not available yet");
                    tokio::time::sleep(self.polling.interval).await;
                }
            }
        }
    }
}

#[async_trait]
impl BlockchainClient for CeloClient {
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    fn account(&self) -> Address {
        self.wallet.address()
    }

    async fn send_transaction(&self, request: &TransferRequest) -> BlockchainResult<TxHash> {
        match *request.fees() {
            FeeMode::Legacy { gas_price } => {
                let tx = TransactionRequest::new()
                    .from(request.from())
                    .to(request.to())
                    .value(U256::from(request.value()))
                    .gas_price(U256::from(gas_price));
                self.send_typed(tx.into()).await
            }
            FeeMode::DynamicFee {
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => {
                let tx = Eip1559TransactionRequest::new()
                    .from(request.from())
                    .to(request.to())
                    .value(U256::from(request.value()))
                    .max_fee_per_gas(U256::from(max_fee_per_gas))
                    .max_priority_fee_per_gas(U256::from(max_priority_fee_per_gas));
                self.send_typed(tx.into()).await
            }
            FeeMode::FeeCurrency {
                fee_currency,
                max_fee_per_gas,
                max_priority_fee_per_gas,
            } => {
                self.send_fee_currency(
                    request,
                    fee_currency,
                    max_fee_per_gas,
                    max_priority_fee_per_gas,
                )
                .await
            }
        }
    }

    async fn wait_for_receipt(&self, tx_hash: &TxHash) -> BlockchainResult<TransactionReceipt> {
        tokio::time::timeout(self.polling.timeout, self.poll_receipt(tx_hash))
            .await
            .map_err(|_| {
                BlockchainError::timeout(format!(
                    "no receipt for {} after {}s",
                    tx_hash,
                    self.polling.timeout.as_secs()
                ))
            })?
    }
}
