//! Asset identifiers.
//!
//! The bridge custodies two kinds of value: CW20 token contracts and the
//! chain's single native currency. The native currency is addressed through
//! a sentinel variant rather than by denom, so every registry keyed by token
//! treats it uniformly.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use std::fmt;

/// Storage key used for the native currency sentinel.
pub const NATIVE_TOKEN_KEY: &str = "native";

/// A custodied asset
#[cw_serde]
pub enum AssetInfo {
    /// The chain's native currency (denom fixed by the bridge configuration)
    Native {},
    /// A CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn cw20(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Cw20 {
            contract_addr: Addr::unchecked(contract_addr),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native {})
    }

    /// Key under which the asset is stored in per-token maps.
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native {} => NATIVE_TOKEN_KEY.to_string(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.to_string(),
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
