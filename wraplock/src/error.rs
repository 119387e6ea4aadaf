//! Error types for the WrapLock contract
//!
//! Every variant aborts the current transaction; no error is recovered
//! locally and all state written so far is rolled back.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: emitxfer may only be issued by the contract itself")]
    UnauthorizedEmitter,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Contract has not been initialized")]
    NotInitialized,

    #[error("Contract has already been initialized")]
    AlreadyInitialized,

    #[error("Contract has been disabled")]
    Disabled,

    #[error("Invalid chain id: expected 32 bytes, got {got}")]
    InvalidChainId { got: usize },

    // ========================================================================
    // Contract Registry Errors
    // ========================================================================

    #[error("Token contract is not registered: {contract}")]
    UnregisteredContract { contract: String },

    #[error("Mapping already exists: {native} <-> {wraptoken}")]
    DuplicateMapping { native: String, wraptoken: String },

    #[error("No mapping for token contract: {contract}")]
    UnknownMapping { contract: String },

    #[error("Cannot remove {contract}: {symbol} reserve of {balance} still locked")]
    ReserveOutstanding {
        contract: String,
        symbol: String,
        balance: Uint128,
    },

    // ========================================================================
    // Deposit Errors
    // ========================================================================

    #[error("Invalid memo: {reason}")]
    InvalidMemo { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Reserve Errors
    // ========================================================================

    #[error("Insufficient reserve for {symbol}: available {available}, requested {requested}")]
    InsufficientReserve {
        symbol: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Precision mismatch for {symbol}: reserve has {expected}, asset has {got}")]
    PrecisionMismatch {
        symbol: String,
        expected: u8,
        got: u8,
    },

    // ========================================================================
    // Proof Errors
    // ========================================================================

    #[error("Proof already processed: {receipt_digest}")]
    DuplicateProof { receipt_digest: String },

    #[error("Proof verification failed: {reason}")]
    ProofVerificationFailed { reason: String },

    #[error("Proven action account {got} does not match paired wraptoken contract {expected}")]
    ProofAccountMismatch { expected: String, got: String },
}
