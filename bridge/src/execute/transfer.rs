//! Incoming transfer protocol: list, confirm, execute.
//!
//! The signer lists a transfer under the hash of its originating
//! transaction. Active validators confirm it. Once the confirmation count
//! reaches the quorum the signer executes it, which pays out exactly once.

use std::collections::BTreeMap;

use common::AssetInfo;
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::{active_validator_id, require, Role};
use crate::error::ContractError;
use crate::events;
use crate::guard::{ensure_unlocked, guard_payouts};
use crate::hash::parse_hash;
use crate::msg::ListEntry;
use crate::state::{TransferRecord, CONFIG, TOKENS, TRANSFERS};
use crate::token::{balance_of, mint_to, safe_transfer, validate_asset};

/// Execute handler for listing a batch of incoming transfers
pub fn execute_list(
    deps: DepsMut,
    info: MessageInfo,
    entries: Vec<ListEntry>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, &[Role::Signer])?;

    let mut response = Response::new().add_attribute("action", "list");
    for entry in entries {
        let tx_hash = parse_hash(&entry.tx_hash)?;
        let token = validate_asset(deps.as_ref(), &entry.token)?;
        if !TOKENS.has(deps.storage, &token.key()) {
            return Err(ContractError::not_registered(
                "bridge: trying to list unregistered token",
            ));
        }
        if entry.amount.is_zero() {
            return Err(ContractError::invalid_amount(
                "bridge: amount must be more than zero",
            ));
        }
        // Records are saved as we go, so a repeat within the batch is caught here
        if TRANSFERS.has(deps.storage, &tx_hash) {
            return Err(ContractError::already_exists("bridge: txHash already listed"));
        }

        let record = TransferRecord {
            token,
            recipient: deps.api.addr_validate(&entry.recipient)?,
            amount: entry.amount,
            source_chain_id: entry.source_chain_id,
            confirmation_count: 0,
            is_sent: false,
            confirmed_by: vec![],
        };
        TRANSFERS.save(deps.storage, &tx_hash, &record)?;

        response = response.add_event(events::listed(&tx_hash, entry.source_chain_id));
    }

    Ok(response)
}

/// Execute handler for an active validator confirming listed transfers
pub fn execute_confirm(
    deps: DepsMut,
    info: MessageInfo,
    hashes: Vec<Binary>,
) -> Result<Response, ContractError> {
    let validator_id =
        active_validator_id(deps.storage, &info.sender)?.ok_or(ContractError::Unauthorized)?;

    let mut response = Response::new()
        .add_attribute("action", "confirm")
        .add_attribute("validator_id", validator_id.to_string());
    for hash in hashes {
        let tx_hash = parse_hash(&hash)?;
        let mut record = TRANSFERS
            .may_load(deps.storage, &tx_hash)?
            .ok_or_else(|| ContractError::not_found("bridge: txHash not listed"))?;

        if record.is_sent {
            return Err(ContractError::AlreadySent);
        }
        if record.confirmed_by.contains(&validator_id) {
            return Err(ContractError::AlreadyConfirmed);
        }

        record.confirmed_by.push(validator_id);
        record.confirmation_count += 1;
        TRANSFERS.save(deps.storage, &tx_hash, &record)?;

        response = response.add_event(events::confirmed(&tx_hash, validator_id));
    }

    Ok(response)
}

/// Execute handler for paying out confirmed transfers.
///
/// Hashes below quorum or already sent are skipped. An unknown hash fails
/// the whole batch with a storage error.
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    hashes: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, &[Role::Signer])?;

    // Custody left per token after the payouts already built in this batch
    let mut available: BTreeMap<String, Uint128> = BTreeMap::new();
    let mut payouts = vec![];
    let mut transfer_events = vec![];

    for hash in hashes {
        let tx_hash = parse_hash(&hash)?;
        let mut record = TRANSFERS.load(deps.storage, &tx_hash)?;

        if record.confirmation_count < config.required_confirmations || record.is_sent {
            continue;
        }

        record.is_sent = true;
        TRANSFERS.save(deps.storage, &tx_hash, &record)?;

        let key = record.token.key();
        let token_info = TOKENS.load(deps.storage, &key)?;
        let payout = match (&token_info.asset, token_info.is_owned) {
            (AssetInfo::Cw20 { contract_addr }, true) => {
                mint_to(contract_addr, &record.recipient, record.amount)?
            }
            (asset, _) => {
                let custody = match available.get(&key) {
                    Some(left) => *left,
                    None => balance_of(
                        &deps.querier,
                        asset,
                        &config.native_denom,
                        &env.contract.address,
                    )?,
                };
                let msg = safe_transfer(
                    asset,
                    &config.native_denom,
                    &record.recipient,
                    record.amount,
                    custody,
                )?;
                available.insert(key, custody - record.amount);
                msg
            }
        };
        payouts.push(payout);
        transfer_events.push(events::transfer(&tx_hash, record.amount));
    }

    let sent = payouts.len();
    let payouts = guard_payouts(deps.storage, payouts)?;

    Ok(Response::new()
        .add_submessages(payouts)
        .add_events(transfer_events)
        .add_attribute("action", "transfer")
        .add_attribute("sent", sent.to_string()))
}
