//! State definitions for the relay bridge contract
//!
//! Registries are append-only: ids, pair indices and transfer records are
//! never physically removed, so historical confirmations and audits always
//! resolve.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address, fixed at instantiation
    pub owner: Addr,
    /// Admin address, fixed at instantiation
    pub admin: Addr,
    /// Signer allowed to list and execute transfers (unset until configured)
    pub signer: Option<Addr>,
    /// Whether deposits and the funds ledger are disabled
    pub maintenance: bool,
    /// Distinct validator confirmations needed before a transfer executes
    pub required_confirmations: u64,
    /// Bank denom represented by the native token sentinel
    pub native_denom: String,
}

/// Registered validator
#[cw_serde]
pub struct ValidatorInfo {
    pub address: Addr,
    pub active: bool,
}

/// Registered token
#[cw_serde]
pub struct TokenInfo {
    /// Sequential id, starting at 1
    pub id: u64,
    pub asset: AssetInfo,
    /// Whether the bridge holds mint/burn authority over the token
    pub is_owned: bool,
}

/// Routing pair: source address on this chain to destination on `chain_id`
#[cw_serde]
pub struct Pair {
    pub source: String,
    pub chain_id: u64,
    pub destination: String,
}

/// Incoming transfer keyed by the originating transaction hash
#[cw_serde]
pub struct TransferRecord {
    pub token: AssetInfo,
    pub recipient: Addr,
    pub amount: Uint128,
    pub source_chain_id: u64,
    pub confirmation_count: u64,
    pub is_sent: bool,
    /// Validator ids that confirmed, in confirmation order
    pub confirmed_by: Vec<u64>,
}

/// Outgoing deposit recorded for relayers
#[cw_serde]
pub struct DepositRecord {
    pub deposit_id: [u8; 32],
    pub token: AssetInfo,
    pub sender: Addr,
    pub recipient: String,
    pub amount: Uint128,
    pub destination_chain_id: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:relay-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core State Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Set while guarded payouts are in flight
pub const REENTRANCY_LOCK: Item<bool> = Item::new("reentrancy_lock");

// ============================================================================
// Validator Registry
// ============================================================================

/// Last assigned validator id (0 = none assigned yet)
pub const VALIDATOR_COUNT: Item<u64> = Item::new("validator_count");

/// Key: validator address, Value: validator id
pub const VALIDATOR_IDS: Map<&Addr, u64> = Map::new("validator_ids");

/// Key: validator id, Value: ValidatorInfo
pub const VALIDATORS: Map<u64, ValidatorInfo> = Map::new("validators");

// ============================================================================
// Token Registry
// ============================================================================

/// Last assigned token id
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Key: token key (`AssetInfo::key`), Value: TokenInfo
pub const TOKENS: Map<&str, TokenInfo> = Map::new("tokens");

// ============================================================================
// Links & Pairs
// ============================================================================

/// Key: remote chain id, Value: bridge address on that chain
pub const LINKS: Map<u64, String> = Map::new("links");

/// Number of pair records ever appended
pub const PAIR_COUNT: Item<u64> = Item::new("pair_count");

/// Key: pair index, Value: Pair
pub const PAIRS: Map<u64, Pair> = Map::new("pairs");

/// Key: pair index, Value: deleted flag (absent = not deleted)
pub const PAIR_DELETED: Map<u64, bool> = Map::new("pair_deleted");

/// Key: (source, chain id), Value: index of the most recent pair record
pub const PAIR_INDEX: Map<(&str, u64), u64> = Map::new("pair_index");

// ============================================================================
// Funds Ledger
// ============================================================================

/// Key: (depositor, token key), Value: recorded liability
pub const FUNDS: Map<(&Addr, &str), Uint128> = Map::new("funds");

// ============================================================================
// Transfer Protocol
// ============================================================================

/// Key: 32-byte transaction hash, Value: TransferRecord
pub const TRANSFERS: Map<&[u8], TransferRecord> = Map::new("transfers");

/// Next outgoing deposit nonce
pub const DEPOSIT_NONCE: Item<u64> = Item::new("deposit_nonce");

/// Key: deposit nonce, Value: DepositRecord
pub const DEPOSITS: Map<u64, DepositRecord> = Map::new("deposits");
