//! Common - Shared Types for the Relay Bridge Contracts
//!
//! This package provides the asset identifier shared between the bridge
//! contract, its message types, and off-chain tooling that builds messages.

pub mod asset;

pub use asset::{AssetInfo, NATIVE_TOKEN_KEY};
