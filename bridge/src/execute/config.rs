//! Registry management handlers.
//!
//! This module handles:
//! - Token registration and the owned flag
//! - Links to the bridge contract on remote chains
//! - Routing pairs (append-only, soft delete)

use common::AssetInfo;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdResult, Storage};

use crate::access::{require, OWNER_OR_ADMIN};
use crate::error::ContractError;
use crate::state::{
    Pair, TokenInfo, CONFIG, LINKS, PAIRS, PAIR_COUNT, PAIR_DELETED, PAIR_INDEX, TOKENS,
    TOKEN_COUNT,
};
use crate::token::{is_minter, validate_asset};

// ============================================================================
// Token Management
// ============================================================================

/// Register tokens. A CW20 token whose minter is this contract is
/// registered as owned; the native sentinel never is.
pub fn execute_register_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    tokens: Vec<AssetInfo>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let mut next_id = TOKEN_COUNT.load(deps.storage)?;
    let mut response = Response::new().add_attribute("action", "register_tokens");

    for token in tokens {
        let asset = validate_asset(deps.as_ref(), &token)?;
        let key = asset.key();

        if TOKENS.has(deps.storage, &key) {
            return Err(ContractError::already_exists(
                "bridge: token already registered",
            ));
        }

        let is_owned = match &asset {
            AssetInfo::Native {} => false,
            AssetInfo::Cw20 { contract_addr } => {
                is_minter(&deps.querier, contract_addr, &env.contract.address)
            }
        };

        next_id += 1;
        TOKENS.save(
            deps.storage,
            &key,
            &TokenInfo {
                id: next_id,
                asset,
                is_owned,
            },
        )?;

        response = response
            .add_attribute("token", key)
            .add_attribute("token_id", next_id.to_string())
            .add_attribute("is_owned", is_owned.to_string());
    }

    TOKEN_COUNT.save(deps.storage, &next_id)?;

    Ok(response)
}

/// Override the owned flag of a registered token.
pub fn execute_change_token_ownership(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
    is_owned: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let key = validate_asset(deps.as_ref(), &token)?.key();
    let mut token_info = TOKENS
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::not_registered("bridge: token should be registered first"))?;

    if is_owned && token_info.asset.is_native() {
        return Err(ContractError::NativeNotMintable);
    }

    token_info.is_owned = is_owned;
    TOKENS.save(deps.storage, &key, &token_info)?;

    Ok(Response::new()
        .add_attribute("action", "change_token_ownership")
        .add_attribute("token", key)
        .add_attribute("is_owned", is_owned.to_string()))
}

// ============================================================================
// Links
// ============================================================================

/// Bind the bridge address on `chain_id`. Links cannot be replaced.
pub fn execute_add_link(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    if LINKS.has(deps.storage, chain_id) {
        return Err(ContractError::already_exists(
            "bridge: link for this contract already set",
        ));
    }
    LINKS.save(deps.storage, chain_id, &address)?;

    Ok(Response::new()
        .add_attribute("action", "add_link")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("address", address))
}

// ============================================================================
// Pairs
// ============================================================================

/// Append a pair for (`source`, `chain_id`) unless a live one exists.
pub fn execute_add_pair(
    deps: DepsMut,
    info: MessageInfo,
    source: String,
    chain_id: u64,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    if live_pair_index(deps.storage, &source, chain_id)?.is_some() {
        return Err(ContractError::already_exists("bridge: pair already exists"));
    }

    let index = PAIR_COUNT.load(deps.storage)?;
    PAIRS.save(
        deps.storage,
        index,
        &Pair {
            source: source.clone(),
            chain_id,
            destination: destination.clone(),
        },
    )?;
    PAIR_INDEX.save(deps.storage, (source.as_str(), chain_id), &index)?;
    PAIR_COUNT.save(deps.storage, &(index + 1))?;

    Ok(Response::new()
        .add_attribute("action", "add_pair")
        .add_attribute("index", index.to_string())
        .add_attribute("source", source)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("destination", destination))
}

/// Mark the live pair for (`source`, `chain_id`) deleted. The record stays
/// readable by index.
pub fn execute_remove_pair(
    deps: DepsMut,
    info: MessageInfo,
    source: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let index = live_pair_index(deps.storage, &source, chain_id)?
        .ok_or_else(|| ContractError::not_found("bridge: invalid pair"))?;
    PAIR_DELETED.save(deps.storage, index, &true)?;

    Ok(Response::new()
        .add_attribute("action", "remove_pair")
        .add_attribute("index", index.to_string())
        .add_attribute("source", source)
        .add_attribute("chain_id", chain_id.to_string()))
}

/// Index of the undeleted pair bound to (`source`, `chain_id`), if any.
pub fn live_pair_index(
    storage: &dyn Storage,
    source: &str,
    chain_id: u64,
) -> StdResult<Option<u64>> {
    let Some(index) = PAIR_INDEX.may_load(storage, (source, chain_id))? else {
        return Ok(None);
    };
    let deleted = PAIR_DELETED.may_load(storage, index)?.unwrap_or(false);
    Ok((!deleted).then_some(index))
}
