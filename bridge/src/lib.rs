//! Relay Bridge Contract - Validator-Confirmed Token Bridge
//!
//! Moves tokens between this chain and remote chains. Tokens the bridge
//! mints ("owned") are burned on deposit and minted on arrival; all other
//! tokens, including the native denom, are held in custody and paid out of
//! it, backed by liquidity that providers park through the funds ledger.
//!
//! # Outgoing Flow (Deposit)
//! 1. User deposits a registered token with a remote recipient
//! 2. The contract burns or takes custody and records a nonce and deposit id
//! 3. Relayers pick up the `wasm-Deposit` event
//!
//! # Incoming Flow
//! 1. The signer lists the transfer under its source transaction hash
//! 2. Active validators confirm it
//! 3. Once the quorum is met the signer executes it, paying out exactly once
//!
//! # Security
//! - Owner/admin, signer and validator roles
//! - Maintenance switch closing deposits and the funds ledger
//! - Reentrancy lock around every handler that pays out of custody

pub mod access;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod guard;
pub mod hash;
pub mod msg;
mod query;
pub mod state;
pub mod token;

pub use crate::error::ContractError;
pub use crate::hash::{compute_deposit_id, keccak256};
