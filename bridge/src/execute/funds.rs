//! Liquidity provider ledger.
//!
//! Providers park custody liquidity for non-owned tokens and may take back
//! at most what they recorded. The ledger only bounds withdrawals; it is not
//! reconciled against the custody balance, which transfers also draw on.

use common::AssetInfo;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::access::{ensure_not_maintenance, nonpayable};
use crate::error::ContractError;
use crate::events;
use crate::guard::{ensure_unlocked, guard_payouts};
use crate::state::{TokenInfo, CONFIG, FUNDS, TOKENS};
use crate::token::{balance_of, native_sent, safe_transfer, safe_transfer_from, validate_asset};

/// Pull `amount` into custody and credit it to the caller.
pub fn execute_add_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_maintenance(&config)?;

    let token_info = load_fundable_token(&deps, &token, amount)?;
    let key = token_info.asset.key();

    let mut messages = vec![];
    match &token_info.asset {
        AssetInfo::Native {} => {
            if native_sent(&info, &config.native_denom)? != amount {
                return Err(ContractError::invalid_amount("bridge: invalid amount"));
            }
        }
        AssetInfo::Cw20 { contract_addr } => {
            nonpayable(&info)?;
            messages.push(safe_transfer_from(
                &deps.querier,
                contract_addr,
                &info.sender,
                &env.contract.address,
                amount,
            )?);
        }
    }

    let balance = FUNDS
        .may_load(deps.storage, (&info.sender, &key))?
        .unwrap_or_default();
    FUNDS.save(deps.storage, (&info.sender, &key), &(balance + amount))?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(events::funded(&info.sender, &key, amount, false))
        .add_attribute("action", "add_funds")
        .add_attribute("token", key)
        .add_attribute("amount", amount))
}

/// Pay back up to the caller's recorded funds. The balance is debited
/// before the payout is dispatched.
pub fn execute_withdraw_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_not_maintenance(&config)?;
    ensure_unlocked(deps.storage)?;

    let token_info = load_fundable_token(&deps, &token, amount)?;
    let key = token_info.asset.key();

    let balance = FUNDS
        .may_load(deps.storage, (&info.sender, &key))?
        .unwrap_or_default();
    if amount > balance {
        return Err(ContractError::invalid_amount("bridge: invalid amount"));
    }

    let custody = balance_of(
        &deps.querier,
        &token_info.asset,
        &config.native_denom,
        &env.contract.address,
    )?;
    let payout = safe_transfer(
        &token_info.asset,
        &config.native_denom,
        &info.sender,
        amount,
        custody,
    )?;

    FUNDS.save(deps.storage, (&info.sender, &key), &(balance - amount))?;
    let payouts = guard_payouts(deps.storage, vec![payout])?;

    Ok(Response::new()
        .add_submessages(payouts)
        .add_event(events::funded(&info.sender, &key, amount, true))
        .add_attribute("action", "withdraw_funds")
        .add_attribute("token", key)
        .add_attribute("amount", amount))
}

/// Shared preconditions of the funds path: positive amount, registered,
/// not owned.
fn load_fundable_token(
    deps: &DepsMut,
    token: &AssetInfo,
    amount: Uint128,
) -> Result<TokenInfo, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::invalid_amount(
            "bridge: amount must be greater than zero",
        ));
    }

    let key = validate_asset(deps.as_ref(), token)?.key();
    let token_info = TOKENS
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::not_registered("bridge: token should be registered first"))?;

    if token_info.is_owned {
        return Err(ContractError::NoFundingNeeded);
    }
    Ok(token_info)
}
