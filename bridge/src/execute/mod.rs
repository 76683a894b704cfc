//! Execute handlers for the relay bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `admin` - Signer, maintenance mode and confirmation quorum
//! - `validators` - Validator registry
//! - `config` - Token, link and pair registries
//! - `funds` - Liquidity provider ledger (add/withdraw)
//! - `outgoing` - Deposits towards a remote chain
//! - `transfer` - List, confirm and execute incoming transfers

mod admin;
mod config;
mod funds;
mod outgoing;
mod transfer;
mod validators;

pub use admin::*;
pub use config::*;
pub use funds::*;
pub use outgoing::*;
pub use transfer::*;
pub use validators::*;
