//! Common - Shared Wire Types for the WrapLock Bridge
//!
//! This package holds everything both sides of the bridge must agree on
//! byte-for-byte: the extended asset representation, the canonical
//! `TransferMessage` encoding, the proof structures handed to the
//! verification contract, and the hashing helpers used to fingerprint them.

pub mod asset;
pub mod codec;
pub mod hash;
pub mod proof;
pub mod xfer;

pub use asset::ExtendedAsset;
pub use hash::{bytes32_to_hex, keccak256};
pub use proof::{
    ActionProof, ActionReceipt, AuthenticatedBlock, BlockHeader, HeavyProof, LightProof,
    ProvenAction, VerifiedActionResponse, VerifierQueryMsg,
};
pub use xfer::{validate_identity, TransferMessage, EMITXFER_ACTION};
