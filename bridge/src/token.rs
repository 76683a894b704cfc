//! External token collaborator.
//!
//! Builds the CW20 and bank messages the ledger dispatches, and checks the
//! preconditions a token contract would reject on, so a failed pull or push
//! surfaces as `TransferHelper: ...` instead of an opaque submessage error.

use common::AssetInfo;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, Deps, MessageInfo, QuerierWrapper, StdResult,
    Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};

use crate::error::ContractError;

/// Validate a user-supplied asset identifier
pub fn validate_asset(deps: Deps, asset: &AssetInfo) -> StdResult<AssetInfo> {
    match asset {
        AssetInfo::Native {} => Ok(AssetInfo::Native {}),
        AssetInfo::Cw20 { contract_addr } => Ok(AssetInfo::Cw20 {
            contract_addr: deps.api.addr_validate(contract_addr.as_str())?,
        }),
    }
}

/// Whether `bridge` is the minter of the CW20 token.
///
/// Tokens that do not answer the minter query are treated as not owned.
pub fn is_minter(querier: &QuerierWrapper, token: &Addr, bridge: &Addr) -> bool {
    querier
        .query_wasm_smart::<Option<MinterResponse>>(token, &Cw20QueryMsg::Minter {})
        .ok()
        .flatten()
        .map(|minter| minter.minter == bridge.as_str())
        .unwrap_or(false)
}

/// Amount of `denom` attached to the call. Any other denom is rejected,
/// since nothing in the ledger could account for it.
pub fn native_sent(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    if info.funds.iter().any(|c| c.denom != denom) {
        return Err(ContractError::NonPayable);
    }
    Ok(info.funds.iter().map(|c| c.amount).sum())
}

/// Custody balance of `asset` held by `holder`
pub fn balance_of(
    querier: &QuerierWrapper,
    asset: &AssetInfo,
    native_denom: &str,
    holder: &Addr,
) -> StdResult<Uint128> {
    match asset {
        AssetInfo::Native {} => Ok(querier.query_balance(holder, native_denom)?.amount),
        AssetInfo::Cw20 { contract_addr } => {
            let res: BalanceResponse = querier.query_wasm_smart(
                contract_addr,
                &Cw20QueryMsg::Balance {
                    address: holder.to_string(),
                },
            )?;
            Ok(res.balance)
        }
    }
}

/// Pull `amount` of a CW20 token from `owner` into `bridge` custody.
pub fn safe_transfer_from(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    bridge: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    ensure_pullable(querier, token, owner, bridge, amount)?;
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: bridge.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Burn `amount` of an owned CW20 token from `owner`'s balance.
pub fn safe_burn_from(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    bridge: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    ensure_pullable(querier, token, owner, bridge, amount)?;
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Mint `amount` of an owned CW20 token to `recipient`.
pub fn mint_to(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Push `amount` out of custody. `available` is the custody balance left
/// for this asset after earlier payouts in the same call.
pub fn safe_transfer(
    asset: &AssetInfo,
    native_denom: &str,
    recipient: &Addr,
    amount: Uint128,
    available: Uint128,
) -> Result<CosmosMsg, ContractError> {
    if available < amount {
        return Err(ContractError::transfer_failed(asset.is_native()));
    }

    match asset {
        AssetInfo::Native {} => Ok(CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: native_denom.to_string(),
                amount,
            }],
        })),
        AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        })),
    }
}

fn ensure_pullable(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let allowance: AllowanceResponse = querier
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )
        .map_err(|_| ContractError::transfer_from_failed())?;
    let balance: BalanceResponse = querier
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: owner.to_string(),
            },
        )
        .map_err(|_| ContractError::transfer_from_failed())?;

    if allowance.allowance < amount || balance.balance < amount {
        return Err(ContractError::transfer_from_failed());
    }
    Ok(())
}
