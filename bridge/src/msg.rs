//! Message types for the relay bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::Pair;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The instantiating account becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address (cannot be rotated afterwards)
    pub admin: String,
    /// Bank denom represented by `AssetInfo::Native {}`
    pub native_denom: String,
    /// Initial confirmation quorum (defaults to 0)
    pub required_confirmations: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Incoming transfer submitted by the signer
#[cw_serde]
pub struct ListEntry {
    pub token: AssetInfo,
    /// Recipient on this chain
    pub recipient: String,
    pub amount: Uint128,
    pub source_chain_id: u64,
    /// 32-byte transaction hash on the source chain
    pub tx_hash: Binary,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Owner / Admin
    // ========================================================================
    /// Register or reactivate validators
    AddValidators { validators: Vec<String> },

    /// Remove (`removed = true`) or reactivate a known validator
    ChangeValidatorState { validator: String, removed: bool },

    /// Replace the signer
    SetSigner { signer: String },

    /// Enable or disable maintenance mode
    SwitchMaintenance { enabled: bool },

    /// Set the confirmation quorum (any value, including zero)
    SetRequiredConfirmations { count: u64 },

    /// Bind the bridge address on a remote chain (insert-once)
    AddLink { chain_id: u64, address: String },

    /// Bind `source` on `chain_id` to `destination`
    AddPair {
        source: String,
        chain_id: u64,
        destination: String,
    },

    /// Soft-delete the pair bound to (`source`, `chain_id`)
    RemovePair { source: String, chain_id: u64 },

    /// Register tokens, detecting mint authority automatically
    RegisterTokens { tokens: Vec<AssetInfo> },

    /// Alias of `RegisterTokens`
    AddTokens { tokens: Vec<AssetInfo> },

    /// Override the owned flag of a registered token
    ChangeTokenOwnership { token: AssetInfo, is_owned: bool },

    // ========================================================================
    // Users
    // ========================================================================
    /// Record an outgoing transfer for relay to `destination_chain_id`.
    /// Native deposits attach exactly `amount` of the native denom.
    Deposit {
        /// Recipient on the destination chain
        recipient: String,
        token: AssetInfo,
        amount: Uint128,
        destination_chain_id: u64,
    },

    /// Provide custody liquidity for a non-owned token
    AddFunds { token: AssetInfo, amount: Uint128 },

    /// Withdraw previously provided liquidity
    WithdrawFunds { token: AssetInfo, amount: Uint128 },

    // ========================================================================
    // Transfer Protocol
    // ========================================================================
    /// List incoming transfers (signer only)
    List { entries: Vec<ListEntry> },

    /// Confirm listed transfers (validators only)
    Confirm { hashes: Vec<Binary> },

    /// Execute confirmed transfers (signer only)
    Transfer { hashes: Vec<Binary> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(RequiredConfirmationsResponse)]
    RequiredConfirmations {},

    #[returns(MaintenanceResponse)]
    MaintenanceEnabled {},

    /// Validator id (0 if never registered) and active flag
    #[returns(ValidatorResponse)]
    Validator { address: String },

    #[returns(ValidatorResponse)]
    ValidatorById { id: u64 },

    #[returns(IsValidatorResponse)]
    IsValidator { address: String },

    /// Token id (0 if not registered) and owned flag
    #[returns(TokenResponse)]
    Token { token: AssetInfo },

    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(LinkResponse)]
    Link { chain_id: u64 },

    /// Pair record by index, including deleted ones
    #[returns(PairResponse)]
    Pair { index: u64 },

    #[returns(HasPairResponse)]
    HasPair { source: String, chain_id: u64 },

    #[returns(DestinationAddressResponse)]
    DestinationAddress { source: String, chain_id: u64 },

    #[returns(FundsResponse)]
    Funds { depositor: String, token: AssetInfo },

    #[returns(TransferResponse)]
    Transfer { tx_hash: Binary },

    #[returns(ConfirmedByResponse)]
    ConfirmedBy { tx_hash: Binary },

    #[returns(IsConfirmedResponse)]
    IsConfirmed { tx_hash: Binary, validator: String },

    #[returns(DepositResponse)]
    Deposit { nonce: u64 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub admin: Addr,
    pub signer: Option<Addr>,
    pub maintenance: bool,
    pub required_confirmations: u64,
    pub native_denom: String,
}

#[cw_serde]
pub struct RequiredConfirmationsResponse {
    pub required_confirmations: u64,
}

#[cw_serde]
pub struct MaintenanceResponse {
    pub enabled: bool,
}

#[cw_serde]
pub struct ValidatorResponse {
    pub address: Addr,
    pub id: u64,
    pub active: bool,
}

#[cw_serde]
pub struct IsValidatorResponse {
    pub is_validator: bool,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: AssetInfo,
    pub id: u64,
    pub is_owned: bool,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct LinkResponse {
    pub chain_id: u64,
    pub address: Option<String>,
}

#[cw_serde]
pub struct PairResponse {
    pub index: u64,
    pub pair: Pair,
    pub deleted: bool,
}

#[cw_serde]
pub struct HasPairResponse {
    pub has_pair: bool,
}

#[cw_serde]
pub struct DestinationAddressResponse {
    pub destination: Option<String>,
}

#[cw_serde]
pub struct FundsResponse {
    pub depositor: Addr,
    pub token: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TransferResponse {
    pub tx_hash: Binary,
    pub token: AssetInfo,
    pub recipient: Addr,
    pub amount: Uint128,
    pub source_chain_id: u64,
    pub confirmation_count: u64,
    pub is_sent: bool,
}

#[cw_serde]
pub struct ConfirmedByResponse {
    pub validator_ids: Vec<u64>,
}

#[cw_serde]
pub struct IsConfirmedResponse {
    pub confirmed: bool,
}

#[cw_serde]
pub struct DepositResponse {
    pub nonce: u64,
    pub deposit_id: Binary,
    pub token: AssetInfo,
    pub sender: Addr,
    pub recipient: String,
    pub amount: Uint128,
    pub destination_chain_id: u64,
}
