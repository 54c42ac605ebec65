//! `CeloClient` against a mock JSON-RPC node.

#![allow(clippy::unwrap_used)]

mod common;

use celo_tx_types::application::demos::{CUSD_FEE_CURRENCY, DEMO_RECIPIENT};
use celo_tx_types::application::{Demo, DemoContext, DemoRunner};
use celo_tx_types::domain::value_objects::{FeeMode, ReceiptSummary, TransferRequest};
use celo_tx_types::infrastructure::blockchain::{
    BlockchainClient, BlockchainError, CIP64_TX_TYPE, CeloClient, ChainId, ReceiptPolling, TxHash,
};
use common::TEST_KEY;
use ethers::signers::{LocalWallet, Signer};
use ethers::utils::hex;
use ethers::utils::rlp::Rlp;
use ethers::types::{Address, U256};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

/// Answers JSON-RPC calls from a fixed method table, echoing the request id.
struct RpcResponder {
    results: HashMap<&'static str, Value>,
    rejections: HashMap<&'static str, &'static str>,
}

impl RpcResponder {
    fn new(results: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        Self {
            results: results.into_iter().collect(),
            rejections: HashMap::new(),
        }
    }

    /// Answers `method` with a JSON-RPC error instead of a result.
    fn rejecting(mut self, method: &'static str, message: &'static str) -> Self {
        self.rejections.insert(method, message);
        self
    }

    fn node(receipt: Value) -> Self {
        Self::new([
            ("eth_chainId", json!("0xaef3")),
            ("eth_blockNumber", json!("0x10")),
            ("eth_gasPrice", json!("0x4a817c800")),
            ("eth_getTransactionCount", json!("0x3")),
            ("eth_estimateGas", json!("0x5208")),
            ("eth_sendRawTransaction", json!(TX_HASH)),
            ("eth_getTransactionReceipt", receipt),
        ])
    }
}

impl Respond for RpcResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let id = body.get("id").cloned().unwrap_or(json!(1));
        let name = body.get("method").and_then(Value::as_str).unwrap_or_default();

        if let Some(message) = self.rejections.get(name) {
            return ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32000, "message": message },
            }));
        }

        let result = self.results.get(name).cloned().unwrap_or(Value::Null);
        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": result,
        }))
    }
}

fn wallet() -> LocalWallet {
    TEST_KEY.parse().unwrap()
}

fn receipt_json() -> Value {
    json!({
        "type": "0x7b",
        "status": "0x1",
        "transactionHash": TX_HASH,
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
        "blockHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
        "blockNumber": "0x10",
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x2540be400",
        "logs": [],
        "logsBloom": "0x00",
        "transactionIndex": "0x0",
        "feeCurrency": "0x874069fa1eb16d44d622f2e0ca25eea172369bc1",
    })
}

async fn start_node(receipt: Value) -> MockServer {
    start_with(RpcResponder::node(receipt)).await
}

async fn start_with(responder: RpcResponder) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(responder)
        .mount(&server)
        .await;
    server
}

fn client_at(url: &str) -> CeloClient {
    let polling = ReceiptPolling::new(Duration::from_millis(10), Duration::from_millis(300));
    CeloClient::new(ChainId::Alfajores, url, wallet(), polling).unwrap()
}

fn client(server: &MockServer) -> CeloClient {
    client_at(&server.uri())
}

/// Returns a local URL nothing is listening on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Returns the raw transaction hex passed to `eth_sendRawTransaction`.
async fn raw_transactions(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
        .filter(|body| body["method"] == "eth_sendRawTransaction")
        .filter_map(|body| body["params"][0].as_str().map(str::to_owned))
        .collect()
}

fn request(fees: FeeMode) -> TransferRequest {
    TransferRequest::new(
        wallet().address(),
        DEMO_RECIPIENT,
        10_000_000_000_000_000,
        fees,
    )
}

#[tokio::test]
async fn receipt_is_returned_verbatim() {
    let server = start_node(receipt_json()).await;
    let client = client(&server);

    let receipt = client
        .wait_for_receipt(&TxHash::new(TX_HASH))
        .await
        .unwrap();

    assert_eq!(receipt.as_json(), &receipt_json());
    assert!(receipt.field("feeCurrency").is_some());

    let summary = ReceiptSummary::from_receipt(&receipt);
    assert!(summary.is_success());
    assert_eq!(summary.tx_type, json!("0x7b"));
}

#[tokio::test]
async fn missing_receipt_times_out() {
    let server = start_node(Value::Null).await;
    let client = client(&server);

    let err = client
        .wait_for_receipt(&TxHash::new(TX_HASH))
        .await
        .unwrap_err();

    assert!(matches!(err, BlockchainError::Timeout(_)));

    let polls = server
        .received_requests()
        .await
        .unwrap_or_default()
        .len();
    assert!(polls > 1);
}

#[tokio::test]
async fn fee_currency_transfer_is_cip64() {
    let server = start_node(receipt_json()).await;
    let client = client(&server);

    let tx_hash = client
        .send_transaction(&request(FeeMode::fee_currency(
            CUSD_FEE_CURRENCY,
            10_000_000_000,
            10_000_000_000,
        )))
        .await
        .unwrap();
    assert_eq!(tx_hash.as_str(), TX_HASH);

    let raw = raw_transactions(&server).await;
    assert_eq!(raw.len(), 1);
    let bytes = hex::decode(raw[0].trim_start_matches("0x")).unwrap();
    assert_eq!(bytes.first(), Some(&CIP64_TX_TYPE));

    let rlp = Rlp::new(bytes.get(1..).unwrap());
    assert_eq!(rlp.val_at::<u64>(0).unwrap(), ChainId::Alfajores.as_u64());
    assert_eq!(rlp.val_at::<U256>(1).unwrap(), U256::from(3));
    assert_eq!(rlp.val_at::<U256>(4).unwrap(), U256::from(21_000));
    assert_eq!(rlp.val_at::<Address>(9).unwrap(), CUSD_FEE_CURRENCY);
}

#[tokio::test]
async fn dynamic_fee_transfer_is_eip1559() {
    let server = start_node(receipt_json()).await;
    let client = client(&server);

    client
        .send_transaction(&request(FeeMode::dynamic_fee(10_000_000_000, 10_000_000_000)))
        .await
        .unwrap();

    let raw = raw_transactions(&server).await;
    assert_eq!(raw.len(), 1);
    assert!(raw[0].starts_with("0x02"));
}

#[tokio::test]
async fn legacy_transfer_is_untyped() {
    let server = start_node(receipt_json()).await;
    let client = client(&server);

    client
        .send_transaction(&request(FeeMode::legacy(20_000_000_000)))
        .await
        .unwrap();

    let raw = raw_transactions(&server).await;
    assert_eq!(raw.len(), 1);
    // legacy transactions are a bare RLP list
    assert!(raw[0].starts_with("0xf8"));
}

#[tokio::test]
async fn unreachable_node_is_a_connection_error() {
    let client = client_at(&closed_port_url());

    for fees in [
        FeeMode::legacy(20_000_000_000),
        FeeMode::dynamic_fee(10_000_000_000, 10_000_000_000),
        FeeMode::fee_currency(CUSD_FEE_CURRENCY, 10_000_000_000, 10_000_000_000),
    ] {
        let err = client.send_transaction(&request(fees)).await.unwrap_err();
        assert!(
            matches!(err, BlockchainError::Connection(_)),
            "{fees}: {err}"
        );
    }
}

#[tokio::test]
async fn rejected_submission_is_a_transaction_error() {
    let responder = RpcResponder::node(receipt_json())
        .rejecting("eth_sendRawTransaction", "insufficient funds for gas * price + value");
    let server = start_with(responder).await;
    let client = client(&server);

    for fees in [
        FeeMode::dynamic_fee(10_000_000_000, 10_000_000_000),
        FeeMode::fee_currency(CUSD_FEE_CURRENCY, 10_000_000_000, 10_000_000_000),
    ] {
        let err = client.send_transaction(&request(fees)).await.unwrap_err();
        assert!(
            matches!(&err, BlockchainError::Transaction(msg) if msg.contains("insufficient funds")),
            "{fees}: {err}"
        );
    }
}

#[tokio::test]
async fn runner_drives_all_three_types_through_the_node() {
    let server = start_node(receipt_json()).await;
    let context = DemoContext::new(Arc::new(client(&server)));
    let mut out = Vec::new();

    let summaries = DemoRunner::new(Demo::ALL)
        .run(&context, &mut out)
        .await
        .unwrap();
    assert_eq!(summaries.len(), 3);

    let prefixes: Vec<String> = raw_transactions(&server)
        .await
        .iter()
        .map(|raw| raw.get(..4).unwrap_or_default().to_owned())
        .collect();
    assert_eq!(prefixes, ["0xf8", "0x02", "0x7b"]);
}
