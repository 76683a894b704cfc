//! Relay Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - Reentrancy lock released from `reply`

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::access::nonpayable;
use crate::error::ContractError;
use crate::execute::{
    execute_add_funds, execute_add_link, execute_add_pair, execute_add_validators,
    execute_change_token_ownership, execute_change_validator_state, execute_confirm,
    execute_deposit, execute_list, execute_register_tokens, execute_remove_pair,
    execute_set_required_confirmations, execute_set_signer, execute_switch_maintenance,
    execute_transfer, execute_withdraw_funds,
};
use crate::guard::{self, RELEASE_GUARD_REPLY_ID};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_confirmed_by, query_deposit, query_destination_address, query_funds,
    query_has_pair, query_is_confirmed, query_is_validator, query_link, query_maintenance,
    query_pair, query_required_confirmations, query_token, query_tokens, query_transfer,
    query_validator, query_validator_by_id,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_NONCE, PAIR_COUNT, REENTRANCY_LOCK,
    TOKEN_COUNT, VALIDATOR_COUNT,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    if msg.native_denom.is_empty() {
        return Err(StdError::generic_err("native_denom must not be empty").into());
    }

    let config = Config {
        owner: info.sender,
        admin,
        signer: None,
        maintenance: false,
        required_confirmations: msg.required_confirmations.unwrap_or(0),
        native_denom: msg.native_denom,
    };
    CONFIG.save(deps.storage, &config)?;

    VALIDATOR_COUNT.save(deps.storage, &0)?;
    TOKEN_COUNT.save(deps.storage, &0)?;
    PAIR_COUNT.save(deps.storage, &0)?;
    DEPOSIT_NONCE.save(deps.storage, &0)?;
    REENTRANCY_LOCK.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("admin", config.admin)
        .add_attribute("native_denom", config.native_denom)
        .add_attribute(
            "required_confirmations",
            config.required_confirmations.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Only deposits and funding take native coins
    if !matches!(msg, ExecuteMsg::Deposit { .. } | ExecuteMsg::AddFunds { .. }) {
        nonpayable(&info)?;
    }

    match msg {
        // Owner / admin
        ExecuteMsg::AddValidators { validators } => {
            execute_add_validators(deps, info, validators)
        }
        ExecuteMsg::ChangeValidatorState { validator, removed } => {
            execute_change_validator_state(deps, info, validator, removed)
        }
        ExecuteMsg::SetSigner { signer } => execute_set_signer(deps, info, signer),
        ExecuteMsg::SwitchMaintenance { enabled } => {
            execute_switch_maintenance(deps, info, enabled)
        }
        ExecuteMsg::SetRequiredConfirmations { count } => {
            execute_set_required_confirmations(deps, info, count)
        }
        ExecuteMsg::AddLink { chain_id, address } => {
            execute_add_link(deps, info, chain_id, address)
        }
        ExecuteMsg::AddPair {
            source,
            chain_id,
            destination,
        } => execute_add_pair(deps, info, source, chain_id, destination),
        ExecuteMsg::RemovePair { source, chain_id } => {
            execute_remove_pair(deps, info, source, chain_id)
        }
        ExecuteMsg::RegisterTokens { tokens } | ExecuteMsg::AddTokens { tokens } => {
            execute_register_tokens(deps, env, info, tokens)
        }
        ExecuteMsg::ChangeTokenOwnership { token, is_owned } => {
            execute_change_token_ownership(deps, info, token, is_owned)
        }

        // Users
        ExecuteMsg::Deposit {
            recipient,
            token,
            amount,
            destination_chain_id,
        } => execute_deposit(
            deps,
            env,
            info,
            recipient,
            token,
            amount,
            destination_chain_id,
        ),
        ExecuteMsg::AddFunds { token, amount } => execute_add_funds(deps, env, info, token, amount),
        ExecuteMsg::WithdrawFunds { token, amount } => {
            execute_withdraw_funds(deps, env, info, token, amount)
        }

        // Transfer protocol
        ExecuteMsg::List { entries } => execute_list(deps, info, entries),
        ExecuteMsg::Confirm { hashes } => execute_confirm(deps, info, hashes),
        ExecuteMsg::Transfer { hashes } => execute_transfer(deps, env, info, hashes),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        RELEASE_GUARD_REPLY_ID => {
            guard::release(deps.storage)?;
            Ok(Response::new().add_attribute("action", "release_guard"))
        }
        id => Err(StdError::generic_err(format!("unknown reply id: {id}")).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::RequiredConfirmations {} => to_json_binary(&query_required_confirmations(deps)?),
        QueryMsg::MaintenanceEnabled {} => to_json_binary(&query_maintenance(deps)?),

        QueryMsg::Validator { address } => to_json_binary(&query_validator(deps, address)?),
        QueryMsg::ValidatorById { id } => to_json_binary(&query_validator_by_id(deps, id)?),
        QueryMsg::IsValidator { address } => to_json_binary(&query_is_validator(deps, address)?),

        QueryMsg::Token { token } => to_json_binary(&query_token(deps, token)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Link { chain_id } => to_json_binary(&query_link(deps, chain_id)?),
        QueryMsg::Pair { index } => to_json_binary(&query_pair(deps, index)?),
        QueryMsg::HasPair { source, chain_id } => {
            to_json_binary(&query_has_pair(deps, source, chain_id)?)
        }
        QueryMsg::DestinationAddress { source, chain_id } => {
            to_json_binary(&query_destination_address(deps, source, chain_id)?)
        }

        QueryMsg::Funds { depositor, token } => {
            to_json_binary(&query_funds(deps, depositor, token)?)
        }
        QueryMsg::Deposit { nonce } => to_json_binary(&query_deposit(deps, nonce)?),

        QueryMsg::Transfer { tx_hash } => to_json_binary(&query_transfer(deps, tx_hash)?),
        QueryMsg::ConfirmedBy { tx_hash } => to_json_binary(&query_confirmed_by(deps, tx_hash)?),
        QueryMsg::IsConfirmed { tx_hash, validator } => {
            to_json_binary(&query_is_confirmed(deps, tx_hash, validator)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
