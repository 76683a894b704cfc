//! Validator registry handlers.
//!
//! Ids are assigned sequentially on first registration and never reused.
//! Removing a validator only clears its active flag, so confirmations it
//! already recorded stay attributable.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::access::{require, OWNER_OR_ADMIN};
use crate::error::ContractError;
use crate::events;
use crate::state::{ValidatorInfo, CONFIG, VALIDATORS, VALIDATOR_COUNT, VALIDATOR_IDS};

/// Register new validators or reactivate removed ones.
pub fn execute_add_validators(
    deps: DepsMut,
    info: MessageInfo,
    validators: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let mut next_id = VALIDATOR_COUNT.load(deps.storage)?;
    let mut response = Response::new().add_attribute("action", "add_validators");

    for validator in validators {
        let address = deps.api.addr_validate(&validator)?;

        let id = match VALIDATOR_IDS.may_load(deps.storage, &address)? {
            Some(id) => {
                if VALIDATORS.load(deps.storage, id)?.active {
                    return Err(ContractError::already_exists(
                        "bridge: validator already exists",
                    ));
                }
                id
            }
            None => {
                next_id += 1;
                VALIDATOR_IDS.save(deps.storage, &address, &next_id)?;
                next_id
            }
        };

        VALIDATORS.save(
            deps.storage,
            id,
            &ValidatorInfo {
                address: address.clone(),
                active: true,
            },
        )?;
        response = response.add_event(events::new_validator(&address));
    }

    VALIDATOR_COUNT.save(deps.storage, &next_id)?;

    Ok(response.add_attribute("validator_count", next_id.to_string()))
}

/// Remove (`removed = true`) or reactivate a validator that has an id.
pub fn execute_change_validator_state(
    deps: DepsMut,
    info: MessageInfo,
    validator: String,
    removed: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    require(deps.storage, &config, &info.sender, OWNER_OR_ADMIN)?;

    let address = deps.api.addr_validate(&validator)?;
    let id = VALIDATOR_IDS
        .may_load(deps.storage, &address)?
        .ok_or_else(|| ContractError::not_found("bridge: validator not found"))?;

    VALIDATORS.save(
        deps.storage,
        id,
        &ValidatorInfo {
            address: address.clone(),
            active: !removed,
        },
    )?;

    let event = if removed {
        events::removed_validator(&address)
    } else {
        events::new_validator(&address)
    };

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "change_validator_state")
        .add_attribute("validator", address)
        .add_attribute("validator_id", id.to_string())
        .add_attribute("removed", removed.to_string()))
}
