//! Owner/admin operations.
//!
//! This module handles:
//! - Signer assignment
//! - Maintenance mode
//! - Required confirmations

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{require, OWNER_OR_ADMIN};
use crate::error::ContractError;
use crate::events;
use crate::state::CONFIG;

/// Replace the signer.
pub fn execute_set_signer(
    deps: DepsMut,
    info: MessageInfo,
    signer: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let signer = deps.api.addr_validate(&signer)?;
    config.signer = Some(signer.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::new_signer(&signer))
        .add_attribute("action", "set_signer")
        .add_attribute("signer", signer))
}

/// Enable or disable maintenance mode.
pub fn execute_switch_maintenance(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    config.maintenance = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::maintenance_state(enabled))
        .add_attribute("action", "switch_maintenance")
        .add_attribute("enabled", enabled.to_string()))
}

/// Set the confirmation quorum.
///
/// Zero makes every listed transfer immediately executable. Raising the
/// quorum stalls earlier listings without touching their confirmations.
pub fn execute_set_required_confirmations(
    deps: DepsMut,
    info: MessageInfo,
    count: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    config.required_confirmations = count;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_event(events::required_confirmations(count))
        .add_attribute("action", "set_required_confirmations")
        .add_attribute("count", count.to_string()))
}
