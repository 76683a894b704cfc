//! Events consumed by relayers and indexers.
//!
//! Names and attribute order are part of the external interface; the runtime
//! prefixes each type with `wasm-`.

use cosmwasm_std::{Addr, Event, Uint128};

use crate::hash::bytes32_to_hex;

pub fn new_validator(validator: &Addr) -> Event {
    Event::new("NewValidator").add_attribute("validator", validator)
}

pub fn removed_validator(validator: &Addr) -> Event {
    Event::new("RemovedValidator").add_attribute("validator", validator)
}

pub fn new_signer(signer: &Addr) -> Event {
    Event::new("NewSigner").add_attribute("signer", signer)
}

pub fn maintenance_state(enabled: bool) -> Event {
    Event::new("MaintenanceState").add_attribute("enabled", enabled.to_string())
}

pub fn required_confirmations(count: u64) -> Event {
    Event::new("RequiredConfirmations").add_attribute("count", count.to_string())
}

pub fn deposit(
    token: &str,
    recipient: &str,
    amount: Uint128,
    destination_chain_id: u64,
    nonce: u64,
    deposit_id: &[u8; 32],
) -> Event {
    Event::new("Deposit")
        .add_attribute("token", token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("deposit_id", bytes32_to_hex(deposit_id))
}

pub fn funded(caller: &Addr, token: &str, amount: Uint128, is_withdraw: bool) -> Event {
    Event::new("Funded")
        .add_attribute("caller", caller)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("is_withdraw", is_withdraw.to_string())
}

pub fn listed(tx_hash: &[u8; 32], source_chain_id: u64) -> Event {
    Event::new("Listed")
        .add_attribute("tx_hash", bytes32_to_hex(tx_hash))
        .add_attribute("source_chain_id", source_chain_id.to_string())
}

pub fn confirmed(tx_hash: &[u8; 32], validator_id: u64) -> Event {
    Event::new("Confirmed")
        .add_attribute("tx_hash", bytes32_to_hex(tx_hash))
        .add_attribute("validator_id", validator_id.to_string())
}

pub fn transfer(tx_hash: &[u8; 32], amount: Uint128) -> Event {
    Event::new("Transfer")
        .add_attribute("tx_hash", bytes32_to_hex(tx_hash))
        .add_attribute("amount", amount)
}
