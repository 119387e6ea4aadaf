//! WrapLock Contract - Lock Side of a Two-Chain Token Bridge
//!
//! This contract custodies native CW20 tokens and releases them only against
//! a proof that the matching action happened on the paired chain.
//!
//! # Deposit Flow (Lock)
//! 1. User sends CW20 tokens to this contract with `ReceiveMsg::Deposit { memo }`
//! 2. The reserve for the token is credited
//! 3. The contract issues `EmitXfer` to itself, appending the canonical
//!    `TransferMessage` to the transfer log
//! 4. The paired chain mints wrapped tokens against a proof of that entry
//!
//! # Release Flow (Withdraw / Cancel)
//! 1. A prover submits a block proof (heavy: `WithdrawA`/`CancelA`,
//!    light: `WithdrawB`/`CancelB`) and an action proof of an `emitxfer`
//!    emitted by the paired wraptoken contract
//! 2. The verification contract attests the receipt
//! 3. The receipt digest is recorded so it can never be used again
//! 4. The reserve is debited and the tokens are sent to the beneficiary
//!    (withdraw) or back to the original owner (cancel)
//!
//! # Security
//! - Reserve can never go below zero
//! - Each receipt digest is consumed at most once across all four paths
//! - Native <-> wraptoken pairing is a bijection
//! - Admin gate (`Disable`) halts all fund movement

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod replay;
pub mod reserve;
pub mod state;
pub mod verifier;

pub use crate::error::ContractError;
pub use crate::verifier::{BlockProof, VerifiedTransfer};
