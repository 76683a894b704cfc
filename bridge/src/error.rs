//! Error types for the relay bridge contract
//!
//! Role failures carry no payload. Every other domain failure carries the
//! diagnostic string relayers and indexers match on.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    /// Storage, serialization and unchecked-access faults
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Maintenance")]
    Maintenance,

    #[error("NonPayable")]
    NonPayable,

    #[error("ReentrancyGuard: reentrant call")]
    ReentrancyBlocked,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("{reason}")]
    AlreadyExists { reason: String },

    #[error("{reason}")]
    NotFound { reason: String },

    #[error("{reason}")]
    NotRegistered { reason: String },

    #[error("bridge: native token cannot be owned")]
    NativeNotMintable,

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("{reason}")]
    InvalidAmount { reason: String },

    #[error("bridge: no need any funds for owned tokens")]
    NoFundingNeeded,

    #[error("bridge: zero receiver")]
    ZeroRecipient,

    #[error("{reason}")]
    ExternalCallFailed { reason: String },

    // ========================================================================
    // Transfer Protocol Errors
    // ========================================================================

    #[error("bridge: transfer already sent")]
    AlreadySent,

    #[error("bridge: already confirmed")]
    AlreadyConfirmed,

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },
}

impl ContractError {
    pub fn already_exists(reason: &str) -> Self {
        ContractError::AlreadyExists {
            reason: reason.to_string(),
        }
    }

    pub fn not_found(reason: &str) -> Self {
        ContractError::NotFound {
            reason: reason.to_string(),
        }
    }

    pub fn not_registered(reason: &str) -> Self {
        ContractError::NotRegistered {
            reason: reason.to_string(),
        }
    }

    pub fn invalid_amount(reason: &str) -> Self {
        ContractError::InvalidAmount {
            reason: reason.to_string(),
        }
    }

    pub fn transfer_from_failed() -> Self {
        ContractError::ExternalCallFailed {
            reason: "TransferHelper: TRANSFER_FROM_FAILED".to_string(),
        }
    }

    pub fn transfer_failed(native: bool) -> Self {
        let reason = if native {
            "TransferHelper: NATIVE_TRANSFER_FAILED"
        } else {
            "TransferHelper: TRANSFER_FAILED"
        };
        ContractError::ExternalCallFailed {
            reason: reason.to_string(),
        }
    }
}
