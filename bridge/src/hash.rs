//! Hash helpers for transaction hashes and deposit ids
//!
//! Incoming transfers are keyed by the 32-byte hash of the originating
//! transaction. Outgoing deposits get a deterministic 32-byte id, since a
//! contract cannot observe the hash of the transaction executing it.
//!
//! # Deposit id byte layout (192 bytes total)
//! - Bytes 0-31:    nonce (big-endian, left-padded)
//! - Bytes 32-63:   destination chain id (big-endian, left-padded)
//! - Bytes 64-95:   keccak256(token key)
//! - Bytes 96-127:  keccak256(sender)
//! - Bytes 128-159: keccak256(recipient)
//! - Bytes 160-191: amount (big-endian, left-padded)

use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the id reported for an outgoing deposit
pub fn compute_deposit_id(
    nonce: u64,
    destination_chain_id: u64,
    token: &str,
    sender: &str,
    recipient: &str,
    amount: u128,
) -> [u8; 32] {
    let mut data = [0u8; 192];

    data[24..32].copy_from_slice(&nonce.to_be_bytes());
    data[32 + 24..64].copy_from_slice(&destination_chain_id.to_be_bytes());
    data[64..96].copy_from_slice(&keccak256(token.as_bytes()));
    data[96..128].copy_from_slice(&keccak256(sender.as_bytes()));
    data[128..160].copy_from_slice(&keccak256(recipient.as_bytes()));
    data[160 + 16..192].copy_from_slice(&amount.to_be_bytes());

    keccak256(&data)
}

/// Parse a 32-byte transaction hash
pub fn parse_hash(hash: &Binary) -> Result<[u8; 32], ContractError> {
    hash.as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: hash.len() })
}

/// Convert bytes32 to a 0x-prefixed hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
