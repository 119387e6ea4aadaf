//! Proof structures and the verification contract interface.
//!
//! The lock contract never checks block inclusion itself. It forwards a
//! block proof and an action proof to the verification contract, which
//! answers with the digest of the receipt it proved, or fails.
//!
//! Two block proof shapes exist:
//! - [`HeavyProof`]: the block to prove plus enough approving blocks to
//!   establish finality on its own. Works against any historical block.
//! - [`LightProof`]: a header and a merkle path to a block root the
//!   verifier has already checkpointed. Cheaper, but only valid once a
//!   heavy proof (or other trusted path) has established that root.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

use crate::codec::Encoder;
use crate::hash::keccak256;

// ============================================================================
// Block proofs
// ============================================================================

#[cw_serde]
pub struct BlockHeader {
    pub timestamp: u32,
    pub producer: String,
    pub confirmed: u16,
    pub previous: Binary,
    pub transaction_mroot: Binary,
    pub action_mroot: Binary,
    pub schedule_version: u32,
}

/// A header with the producer signatures that authenticate it.
#[cw_serde]
pub struct AuthenticatedBlock {
    pub header: BlockHeader,
    pub producer_signatures: Vec<Binary>,
    /// Merkle path from this block to the proven block's root
    pub bmproofpath: Vec<u64>,
}

/// Self-contained block inclusion proof.
#[cw_serde]
pub struct HeavyProof {
    /// 32-byte id of the chain the block belongs to
    pub chain_id: Binary,
    /// Block merkle tree nodes referenced by `bmproofpath`
    pub hashes: Vec<Binary>,
    pub blocktoprove: AuthenticatedBlock,
    /// Blocks whose producers attest finality of `blocktoprove`
    pub bftproof: Vec<AuthenticatedBlock>,
}

/// Proof against a previously checkpointed block root.
#[cw_serde]
pub struct LightProof {
    /// 32-byte id of the chain the block belongs to
    pub chain_id: Binary,
    pub header: BlockHeader,
    /// Checkpointed block merkle root
    pub root: Binary,
    pub bmproofpath: Vec<u64>,
}

// ============================================================================
// Action proofs
// ============================================================================

/// The action whose execution is being proven.
#[cw_serde]
pub struct ProvenAction {
    /// Contract that executed the action
    pub account: String,
    /// Action name, e.g. `emitxfer`
    pub name: String,
    /// Canonically encoded action payload
    pub data: Binary,
}

impl ProvenAction {
    /// Digest committed to by the action receipt's `act_digest`.
    pub fn digest(&self) -> [u8; 32] {
        keccak256(
            &Encoder::new()
                .str(&self.account)
                .str(&self.name)
                .bytes(self.data.as_slice())
                .finish(),
        )
    }
}

/// Execution receipt of a proven action.
#[cw_serde]
pub struct ActionReceipt {
    pub receiver: String,
    /// Digest of the executed [`ProvenAction`]
    pub act_digest: Binary,
    pub global_sequence: u64,
    pub recv_sequence: u64,
}

impl ActionReceipt {
    /// Receipt digest: the unique fingerprint of one executed action, used
    /// for replay prevention.
    pub fn digest(&self) -> [u8; 32] {
        keccak256(
            &Encoder::new()
                .str(&self.receiver)
                .bytes(self.act_digest.as_slice())
                .u64(self.global_sequence)
                .u64(self.recv_sequence)
                .finish(),
        )
    }
}

#[cw_serde]
pub struct ActionProof {
    pub action: ProvenAction,
    pub receipt: ActionReceipt,
    /// Merkle path from the receipt digest to the block's action root
    pub amproofpath: Vec<Binary>,
}

// ============================================================================
// Verification contract interface
// ============================================================================

/// Queries the lock contract sends to the verification contract.
///
/// The verifier proves that `actionproof.receipt` is included in the block.
/// The lock contract itself checks that `receipt.act_digest` equals
/// `action.digest()` before querying, so the decoded payload is bound to
/// the attested receipt.
#[cw_serde]
#[derive(QueryResponses)]
pub enum VerifierQueryMsg {
    /// Verify an action against a heavy block proof
    #[returns(VerifiedActionResponse)]
    CheckProofB {
        blockproof: HeavyProof,
        actionproof: ActionProof,
    },

    /// Verify an action against a light (checkpointed) block proof
    #[returns(VerifiedActionResponse)]
    CheckProofC {
        blockproof: LightProof,
        actionproof: ActionProof,
    },
}

/// Successful verification result. Failure is signalled by a query error.
#[cw_serde]
pub struct VerifiedActionResponse {
    /// Digest of the receipt proven to be included in the block
    pub receipt_digest: Binary,
}
