//! Proof verification boundary.
//!
//! Block inclusion is checked by an external verification contract (the
//! `bridge_contract` in the global config). This module adapts the two block
//! proof shapes to that contract's query interface and turns a successful
//! answer into a trusted receipt digest plus the decoded transfer message.
//!
//! Any failure here is fatal to the calling withdraw/cancel.

use common::{
    ActionProof, HeavyProof, LightProof, TransferMessage, VerifiedActionResponse,
    VerifierQueryMsg, EMITXFER_ACTION,
};
use cosmwasm_std::{Binary, Deps};

use crate::error::ContractError;
use crate::state::GlobalConfig;

/// A block proof the verification contract knows how to check.
pub trait BlockProof {
    /// Label used in response attributes
    const KIND: &'static str;

    /// Chain the proven block belongs to
    fn chain_id(&self) -> &Binary;

    /// Build the verifier query for this proof shape.
    fn into_query(self, actionproof: ActionProof) -> VerifierQueryMsg;
}

impl BlockProof for HeavyProof {
    const KIND: &'static str = "heavy";

    fn chain_id(&self) -> &Binary {
        &self.chain_id
    }

    fn into_query(self, actionproof: ActionProof) -> VerifierQueryMsg {
        VerifierQueryMsg::CheckProofB {
            blockproof: self,
            actionproof,
        }
    }
}

impl BlockProof for LightProof {
    const KIND: &'static str = "light";

    fn chain_id(&self) -> &Binary {
        &self.chain_id
    }

    fn into_query(self, actionproof: ActionProof) -> VerifierQueryMsg {
        VerifierQueryMsg::CheckProofC {
            blockproof: self,
            actionproof,
        }
    }
}

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedTransfer {
    pub receipt_digest: [u8; 32],
    /// Contract that emitted the proven action on the paired chain
    pub account: String,
    pub xfer: TransferMessage,
}

fn failed(reason: impl Into<String>) -> ContractError {
    ContractError::ProofVerificationFailed {
        reason: reason.into(),
    }
}

fn hex_of(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Verify `actionproof` against `blockproof` and decode the proven transfer.
pub fn verify_action<P: BlockProof>(
    deps: Deps,
    config: &GlobalConfig,
    blockproof: P,
    actionproof: ActionProof,
) -> Result<VerifiedTransfer, ContractError> {
    if blockproof.chain_id().as_slice() != config.paired_chain_id.as_slice() {
        return Err(failed(format!(
            "block proof is for chain {}, expected paired chain {}",
            hex_of(blockproof.chain_id().as_slice()),
            hex_of(&config.paired_chain_id)
        )));
    }
    if actionproof.action.name != EMITXFER_ACTION {
        return Err(failed(format!(
            "proven action must be {}, got {}",
            EMITXFER_ACTION, actionproof.action.name
        )));
    }

    // the verifier attests the receipt; the payload is bound to it through act_digest
    let act_digest = actionproof.action.digest();
    if actionproof.receipt.act_digest.as_slice() != act_digest.as_slice() {
        return Err(failed(format!(
            "receipt act_digest {} does not match proven action {}",
            hex_of(actionproof.receipt.act_digest.as_slice()),
            hex_of(&act_digest)
        )));
    }

    let receipt_digest = actionproof.receipt.digest();
    let account = actionproof.action.account.clone();
    let data = actionproof.action.data.clone();

    let res: VerifiedActionResponse = deps
        .querier
        .query_wasm_smart(
            config.bridge_contract.to_string(),
            &blockproof.into_query(actionproof),
        )
        .map_err(|e| failed(e.to_string()))?;

    if res.receipt_digest.as_slice() != receipt_digest.as_slice() {
        return Err(failed(format!(
            "verifier attested receipt {}, proof carries {}",
            hex_of(res.receipt_digest.as_slice()),
            hex_of(&receipt_digest)
        )));
    }

    let xfer = TransferMessage::decode(data.as_slice()).map_err(|e| failed(e.to_string()))?;

    Ok(VerifiedTransfer {
        receipt_digest,
        account,
        xfer,
    })
}
