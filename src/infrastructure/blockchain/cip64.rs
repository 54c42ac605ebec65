//! # CIP-64 Transactions
//!
//! Envelope encoding for Celo fee currency transactions (type `0x7b`).
//!
//! ethers-rs has no typed transaction for CIP-64, so the envelope is built
//! here and signed with the regular [`LocalWallet`]:
//!
//! ```text
//! 0x7b || rlp([chainId, nonce, maxPriorityFeePerGas, maxFeePerGas, gas,
//!              to, value, data, accessList, feeCurrency,
//!              signatureYParity, signatureR, signatureS])
//! ```
//!
//! The signing hash is `keccak256(0x7b || rlp(<first ten fields>))`.

use super::client::{BlockchainError, BlockchainResult};
use ethers::signers::LocalWallet;
use ethers::types::{Address, Bytes, H256, Signature, U256};
use ethers::utils::keccak256;
use ethers::utils::rlp::RlpStream;

/// Envelope type byte of CIP-64 transactions.
pub const CIP64_TX_TYPE: u8 = 0x7b;

const UNSIGNED_FIELDS: usize = 10;
const SIGNED_FIELDS: usize = UNSIGNED_FIELDS + 3;

/// An unsigned CIP-64 transaction with all fields filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cip64Transaction {
    /// Chain ID the signature is bound to.
    pub chain_id: u64,
    /// Sender nonce.
    pub nonce: U256,
    /// Maximum priority fee per gas, in fee currency units.
    pub max_priority_fee_per_gas: U256,
    /// Maximum total fee per gas, in fee currency units.
    pub max_fee_per_gas: U256,
    /// Gas limit.
    pub gas: U256,
    /// Recipient.
    pub to: Address,
    /// Value in wei.
    pub value: U256,
    /// Calldata.
    pub data: Bytes,
    /// Token the fee is paid in.
    pub fee_currency: Address,
}

impl Cip64Transaction {
    fn append_unsigned_fields(&self, rlp: &mut RlpStream) {
        rlp.append(&self.chain_id);
        rlp.append(&self.nonce);
        rlp.append(&self.max_priority_fee_per_gas);
        rlp.append(&self.max_fee_per_gas);
        rlp.append(&self.gas);
        rlp.append(&self.to);
        rlp.append(&self.value);
        rlp.append(&self.data.to_vec());
        // access list, always empty here
        rlp.begin_list(0);
        rlp.append(&self.fee_currency);
    }

    fn envelope(rlp: RlpStream) -> Bytes {
        let body = rlp.out();
        let mut encoded = Vec::with_capacity(body.len() + 1);
        encoded.push(CIP64_TX_TYPE);
        encoded.extend_from_slice(&body);
        Bytes::from(encoded)
    }

    /// Returns the typed payload that is hashed for signing.
    #[must_use]
    pub fn unsigned_payload(&self) -> Bytes {
        let mut rlp = RlpStream::new_list(UNSIGNED_FIELDS);
        self.append_unsigned_fields(&mut rlp);
        Self::envelope(rlp)
    }

    /// Returns the hash the sender signs.
    #[must_use]
    pub fn sighash(&self) -> H256 {
        H256::from(keccak256(self.unsigned_payload()))
    }

    /// Signs the transaction hash with the given wallet.
    ///
    /// # Errors
    ///
    /// Returns `BlockchainError::Signing` if the wallet rejects the hash.
    pub fn signature(&self, wallet: &LocalWallet) -> BlockchainResult<Signature> {
        wallet
            .sign_hash(self.sighash())
            .map_err(|e| BlockchainError::signing(e.to_string()))
    }

    /// Encodes the signed envelope ready for `eth_sendRawTransaction`.
    #[must_use]
    pub fn encode_signed(&self, signature: &Signature) -> Bytes {
        // typed envelopes carry the bare recovery bit
        let y_parity = if signature.v >= 27 {
            signature.v - 27
        } else {
            signature.v
        };

        let mut rlp = RlpStream::new_list(SIGNED_FIELDS);
        self.append_unsigned_fields(&mut rlp);
        rlp.append(&y_parity);
        rlp.append(&signature.r);
        rlp.append(&signature.s);
        Self::envelope(rlp)
    }

    /// Signs and encodes the transaction in one step.
    ///
    /// # Errors
    ///
    /// Returns `BlockchainError::Signing` if signing fails.
    pub fn sign(&self, wallet: &LocalWallet) -> BlockchainResult<Bytes> {
        let signature = self.signature(wallet)?;
        Ok(self.encode_signed(&signature))
    }
}
