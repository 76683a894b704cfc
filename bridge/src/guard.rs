//! Reentrancy guard for handlers that push value out of custody.
//!
//! A guarded handler commits its state, sets the lock, and dispatches its
//! payouts. The last payout is wrapped in a `reply_on_success` submessage;
//! the reply arrives after every payout (and anything the payouts triggered)
//! has run, and releases the lock. A guarded handler entered while the lock
//! is held fails, which reverts the whole outer transaction.

use cosmwasm_std::{CosmosMsg, StdResult, Storage, SubMsg};

use crate::error::ContractError;
use crate::state::REENTRANCY_LOCK;

/// Reply id of the submessage that releases the lock
pub const RELEASE_GUARD_REPLY_ID: u64 = 1;

pub fn ensure_unlocked(storage: &dyn Storage) -> Result<(), ContractError> {
    if REENTRANCY_LOCK.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::ReentrancyBlocked);
    }
    Ok(())
}

/// Lock and wrap `payouts`. No payouts, no lock.
pub fn guard_payouts(storage: &mut dyn Storage, payouts: Vec<CosmosMsg>) -> StdResult<Vec<SubMsg>> {
    let Some(last) = payouts.len().checked_sub(1) else {
        return Ok(vec![]);
    };
    REENTRANCY_LOCK.save(storage, &true)?;

    Ok(payouts
        .into_iter()
        .enumerate()
        .map(|(i, msg)| {
            if i == last {
                SubMsg::reply_on_success(msg, RELEASE_GUARD_REPLY_ID)
            } else {
                SubMsg::new(msg)
            }
        })
        .collect())
}

pub fn release(storage: &mut dyn Storage) -> StdResult<()> {
    REENTRANCY_LOCK.save(storage, &false)
}
