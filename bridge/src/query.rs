//! Query handlers for the relay bridge contract.
//!
//! Lookups of unknown validators, tokens and links answer with zero ids or
//! `None`; lookups of unknown transfers, deposits and pair indices fail with
//! a storage `not found` error.

use common::AssetInfo;
use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::execute::live_pair_index;
use crate::hash::parse_hash;
use crate::msg::{
    ConfigResponse, ConfirmedByResponse, DepositResponse, DestinationAddressResponse,
    FundsResponse, HasPairResponse, IsConfirmedResponse, IsValidatorResponse, LinkResponse,
    MaintenanceResponse, PairResponse, RequiredConfirmationsResponse, TokenResponse,
    TokensResponse, TransferResponse, ValidatorResponse,
};
use crate::state::{
    TokenInfo, CONFIG, DEPOSITS, FUNDS, LINKS, PAIRS, PAIR_DELETED, TOKENS, TRANSFERS,
    VALIDATORS, VALIDATOR_IDS,
};
use crate::token::validate_asset;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Configuration
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        admin: config.admin,
        signer: config.signer,
        maintenance: config.maintenance,
        required_confirmations: config.required_confirmations,
        native_denom: config.native_denom,
    })
}

pub fn query_required_confirmations(deps: Deps) -> StdResult<RequiredConfirmationsResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RequiredConfirmationsResponse {
        required_confirmations: config.required_confirmations,
    })
}

pub fn query_maintenance(deps: Deps) -> StdResult<MaintenanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaintenanceResponse {
        enabled: config.maintenance,
    })
}

// ============================================================================
// Validators
// ============================================================================

/// Validator record by address. Never-registered addresses report id 0.
pub fn query_validator(deps: Deps, address: String) -> StdResult<ValidatorResponse> {
    let address = deps.api.addr_validate(&address)?;
    match VALIDATOR_IDS.may_load(deps.storage, &address)? {
        Some(id) => query_validator_by_id(deps, id),
        None => Ok(ValidatorResponse {
            address,
            id: 0,
            active: false,
        }),
    }
}

pub fn query_validator_by_id(deps: Deps, id: u64) -> StdResult<ValidatorResponse> {
    let validator = VALIDATORS.load(deps.storage, id)?;
    Ok(ValidatorResponse {
        address: validator.address,
        id,
        active: validator.active,
    })
}

pub fn query_is_validator(deps: Deps, address: String) -> StdResult<IsValidatorResponse> {
    let validator = query_validator(deps, address)?;
    Ok(IsValidatorResponse {
        is_validator: validator.active,
    })
}

// ============================================================================
// Tokens, Links & Pairs
// ============================================================================

/// Token record. Unregistered tokens report id 0.
pub fn query_token(deps: Deps, token: AssetInfo) -> StdResult<TokenResponse> {
    let token = validate_asset(deps, &token)?;
    Ok(match TOKENS.may_load(deps.storage, &token.key())? {
        Some(info) => token_response(info),
        None => TokenResponse {
            token,
            id: 0,
            is_owned: false,
        },
    })
}

/// Registered tokens ordered by key
pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, info)| token_response(info)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

fn token_response(info: TokenInfo) -> TokenResponse {
    TokenResponse {
        token: info.asset,
        id: info.id,
        is_owned: info.is_owned,
    }
}

pub fn query_link(deps: Deps, chain_id: u64) -> StdResult<LinkResponse> {
    Ok(LinkResponse {
        chain_id,
        address: LINKS.may_load(deps.storage, chain_id)?,
    })
}

pub fn query_pair(deps: Deps, index: u64) -> StdResult<PairResponse> {
    let pair = PAIRS.load(deps.storage, index)?;
    let deleted = PAIR_DELETED
        .may_load(deps.storage, index)?
        .unwrap_or(false);
    Ok(PairResponse {
        index,
        pair,
        deleted,
    })
}

pub fn query_has_pair(deps: Deps, source: String, chain_id: u64) -> StdResult<HasPairResponse> {
    Ok(HasPairResponse {
        has_pair: live_pair_index(deps.storage, &source, chain_id)?.is_some(),
    })
}

/// Destination bound to (`source`, `chain_id`), `None` if unbound or deleted
pub fn query_destination_address(
    deps: Deps,
    source: String,
    chain_id: u64,
) -> StdResult<DestinationAddressResponse> {
    let destination = match live_pair_index(deps.storage, &source, chain_id)? {
        Some(index) => Some(PAIRS.load(deps.storage, index)?.destination),
        None => None,
    };
    Ok(DestinationAddressResponse { destination })
}

// ============================================================================
// Funds & Deposits
// ============================================================================

pub fn query_funds(deps: Deps, depositor: String, token: AssetInfo) -> StdResult<FundsResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let token = validate_asset(deps, &token)?;
    let amount = FUNDS
        .may_load(deps.storage, (&depositor, &token.key()))?
        .unwrap_or_default();
    Ok(FundsResponse {
        depositor,
        token,
        amount,
    })
}

pub fn query_deposit(deps: Deps, nonce: u64) -> StdResult<DepositResponse> {
    let deposit = DEPOSITS.load(deps.storage, nonce)?;
    Ok(DepositResponse {
        nonce,
        deposit_id: Binary::from(deposit.deposit_id.to_vec()),
        token: deposit.token,
        sender: deposit.sender,
        recipient: deposit.recipient,
        amount: deposit.amount,
        destination_chain_id: deposit.destination_chain_id,
    })
}

// ============================================================================
// Transfer Protocol
// ============================================================================

fn hash_key(tx_hash: &Binary) -> StdResult<[u8; 32]> {
    parse_hash(tx_hash).map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn query_transfer(deps: Deps, tx_hash: Binary) -> StdResult<TransferResponse> {
    let record = TRANSFERS.load(deps.storage, &hash_key(&tx_hash)?)?;
    Ok(TransferResponse {
        tx_hash,
        token: record.token,
        recipient: record.recipient,
        amount: record.amount,
        source_chain_id: record.source_chain_id,
        confirmation_count: record.confirmation_count,
        is_sent: record.is_sent,
    })
}

/// Ids of the validators that confirmed `tx_hash`, in confirmation order
pub fn query_confirmed_by(deps: Deps, tx_hash: Binary) -> StdResult<ConfirmedByResponse> {
    let validator_ids = TRANSFERS
        .may_load(deps.storage, &hash_key(&tx_hash)?)?
        .map(|record| record.confirmed_by)
        .unwrap_or_default();
    Ok(ConfirmedByResponse { validator_ids })
}

pub fn query_is_confirmed(
    deps: Deps,
    tx_hash: Binary,
    validator: String,
) -> StdResult<IsConfirmedResponse> {
    let validator = deps.api.addr_validate(&validator)?;
    let Some(id) = VALIDATOR_IDS.may_load(deps.storage, &validator)? else {
        return Ok(IsConfirmedResponse { confirmed: false });
    };
    let confirmed = query_confirmed_by(deps, tx_hash)?.validator_ids.contains(&id);
    Ok(IsConfirmedResponse { confirmed })
}
