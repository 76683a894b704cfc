//! Outgoing deposit handler.
//!
//! A deposit takes value out of circulation on this chain (burn for owned
//! tokens, custody otherwise) and records the intent for relayers.

use common::AssetInfo;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::{ensure_not_maintenance, nonpayable};
use crate::error::ContractError;
use crate::events;
use crate::hash::compute_deposit_id;
use crate::state::{DepositRecord, CONFIG, DEPOSITS, DEPOSIT_NONCE, TOKENS};
use crate::token::{native_sent, safe_burn_from, safe_transfer_from, validate_asset};

/// Execute handler for depositing towards `destination_chain_id`
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token: AssetInfo,
    amount: Uint128,
    destination_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_maintenance(&config)?;

    if amount.is_zero() {
        return Err(ContractError::invalid_amount(
            "bridge: amount must be greater than zero",
        ));
    }
    let asset = validate_asset(deps.as_ref(), &token)?;
    if asset.is_native() && native_sent(&info, &config.native_denom)? != amount {
        return Err(ContractError::invalid_amount("bridge: invalid amount"));
    }
    if is_zero_recipient(&recipient) {
        return Err(ContractError::ZeroRecipient);
    }

    let key = asset.key();
    let token_info = TOKENS
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::not_registered("bridge: unable to deposit unregistered token"))?;

    // Native deposits stay in custody as attached
    let mut messages = vec![];
    if let AssetInfo::Cw20 { contract_addr } = &token_info.asset {
        nonpayable(&info)?;
        let msg = if token_info.is_owned {
            safe_burn_from(
                &deps.querier,
                contract_addr,
                &info.sender,
                &env.contract.address,
                amount,
            )?
        } else {
            safe_transfer_from(
                &deps.querier,
                contract_addr,
                &info.sender,
                &env.contract.address,
                amount,
            )?
        };
        messages.push(msg);
    }

    let nonce = DEPOSIT_NONCE.may_load(deps.storage)?.unwrap_or_default();
    DEPOSIT_NONCE.save(deps.storage, &(nonce + 1))?;

    let deposit_id = compute_deposit_id(
        nonce,
        destination_chain_id,
        &key,
        info.sender.as_str(),
        &recipient,
        amount.u128(),
    );
    DEPOSITS.save(
        deps.storage,
        nonce,
        &DepositRecord {
            deposit_id,
            token: token_info.asset.clone(),
            sender: info.sender.clone(),
            recipient: recipient.clone(),
            amount,
            destination_chain_id,
        },
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(events::deposit(
            &key,
            &recipient,
            amount,
            destination_chain_id,
            nonce,
            &deposit_id,
        ))
        .add_attribute("action", "deposit")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount))
}

/// Remote recipients are opaque strings; the zero address is an empty
/// string or hex made only of zeros.
fn is_zero_recipient(recipient: &str) -> bool {
    let digits = recipient.strip_prefix("0x").unwrap_or(recipient);
    digits.is_empty() || digits.bytes().all(|b| b == b'0')
}
