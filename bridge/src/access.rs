//! Role table and capability checks.
//!
//! Every gated handler names the roles allowed to call it; a mismatch fails
//! with a payload-free `Unauthorized`.

use cosmwasm_std::{Addr, MessageInfo, Storage};

use crate::error::ContractError;
use crate::state::{Config, VALIDATORS, VALIDATOR_IDS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    Admin,
    Signer,
    Validator,
}

/// Gate for owner/admin configuration handlers.
pub const OWNER_OR_ADMIN: &[Role] = &[Role::Owner, Role::Admin];

/// Whether `sender` currently holds `role`.
pub fn holds(
    storage: &dyn Storage,
    config: &Config,
    role: Role,
    sender: &Addr,
) -> Result<bool, ContractError> {
    Ok(match role {
        Role::Owner => *sender == config.owner,
        Role::Admin => *sender == config.admin,
        Role::Signer => config.signer.as_ref() == Some(sender),
        Role::Validator => active_validator_id(storage, sender)?.is_some(),
    })
}

/// Fail unless `sender` holds at least one of `roles`.
pub fn require(
    storage: &dyn Storage,
    config: &Config,
    sender: &Addr,
    roles: &[Role],
) -> Result<(), ContractError> {
    for role in roles {
        if holds(storage, config, *role, sender)? {
            return Ok(());
        }
    }
    Err(ContractError::Unauthorized)
}

/// Id of `sender` if it is a registered, active validator.
pub fn active_validator_id(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<Option<u64>, ContractError> {
    let Some(id) = VALIDATOR_IDS.may_load(storage, sender)? else {
        return Ok(None);
    };
    let validator = VALIDATORS.load(storage, id)?;
    Ok(validator.active.then_some(id))
}

/// Deposits and the funds ledger are closed during maintenance.
pub fn ensure_not_maintenance(config: &Config) -> Result<(), ContractError> {
    if config.maintenance {
        return Err(ContractError::Maintenance);
    }
    Ok(())
}

/// Reject native funds attached to a handler that does not take payment.
pub fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::NonPayable);
    }
    Ok(())
}
