//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use celo_tx_types::domain::value_objects::{TransactionReceipt, TransferRequest};
use celo_tx_types::infrastructure::blockchain::{
    BlockchainClient, BlockchainError, BlockchainResult, ChainId, TxHash,
};
use ethers::types::Address;
use parking_lot::Mutex;
use serde_json::json;

/// Well-known development key, never funded on a real network.
pub const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address derived from [`TEST_KEY`].
pub const TEST_ACCOUNT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

/// A call made against [`MockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send(TransferRequest),
    Wait(TxHash),
}

/// In-memory client that records calls and echoes receipts.
#[derive(Debug)]
pub struct MockClient {
    account: Address,
    fail_send_at: Option<usize>,
    calls: Mutex<Vec<Call>>,
}

impl MockClient {
    pub fn new(account: Address) -> Self {
        Self {
            account,
            fail_send_at: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes the `index`-th submission (zero based) fail.
    pub fn failing_send_at(mut self, index: usize) -> Self {
        self.fail_send_at = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn sent(&self) -> Vec<TransferRequest> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Send(request) => Some(*request),
                Call::Wait(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl BlockchainClient for MockClient {
    fn chain_id(&self) -> ChainId {
        ChainId::Alfajores
    }

    fn account(&self) -> Address {
        self.account
    }

    async fn send_transaction(&self, request: &TransferRequest) -> BlockchainResult<TxHash> {
        let mut calls = self.calls.lock();
        let index = calls
            .iter()
            .filter(|call| matches!(call, Call::Send(_)))
            .count();
        calls.push(Call::Send(*request));

        if self.fail_send_at == Some(index) {
            return Err(BlockchainError::transaction("insufficient funds for gas"));
        }
        Ok(TxHash::new(format!("0x{:064x}", index + 1)))
    }

    async fn wait_for_receipt(&self, tx_hash: &TxHash) -> BlockchainResult<TransactionReceipt> {
        let mut calls = self.calls.lock();
        let request = calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Send(request) => Some(*request),
                Call::Wait(_) => None,
            })
            .ok_or_else(|| BlockchainError::transaction("no transaction was sent"))?;
        calls.push(Call::Wait(tx_hash.clone()));

        Ok(TransactionReceipt::new(json!({
            "type": format!("{:#x}", request.tx_type().as_u8()),
            "status": "0x1",
            "transactionHash": tx_hash.as_str(),
            "from": request.from(),
            "to": request.to(),
            "blockNumber": "0x5",
            "gasUsed": "0x5208",
            "logs": [],
        })))
    }
}
