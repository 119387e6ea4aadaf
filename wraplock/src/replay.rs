//! Replay Guard
//!
//! Every proof consumed by a withdraw or cancel leaves its receipt digest in
//! the `processed` table. The digest index is unique, so a receipt can be
//! consumed at most once regardless of which entry point (withdraw/cancel,
//! heavy/light) presents it.
//!
//! Rows are never pruned: dropping a digest would make the proof that
//! produced it spendable again.

use common::bytes32_to_hex;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp};

use crate::error::ContractError;
use crate::state::{processed, ProcessedReceipt, PROCESSED_SEQ};

/// Record `receipt_digest` as consumed, or fail with `DuplicateProof`.
///
/// `payer` is the prover submitting the proof. Returns the new row id.
pub fn add_or_assert(
    storage: &mut dyn Storage,
    receipt_digest: &[u8; 32],
    payer: &Addr,
    now: Timestamp,
) -> Result<u64, ContractError> {
    if is_processed(storage, receipt_digest)? {
        return Err(ContractError::DuplicateProof {
            receipt_digest: bytes32_to_hex(receipt_digest),
        });
    }

    let id = PROCESSED_SEQ.may_load(storage)?.unwrap_or_default();
    let row = ProcessedReceipt {
        id,
        receipt_digest: *receipt_digest,
        payer: payer.clone(),
        processed_at: now,
    };
    processed().save(storage, id, &row)?;
    PROCESSED_SEQ.save(storage, &(id + 1))?;

    Ok(id)
}

pub fn is_processed(storage: &dyn Storage, receipt_digest: &[u8; 32]) -> StdResult<bool> {
    Ok(processed()
        .idx
        .digest
        .item(storage, receipt_digest.to_vec())?
        .is_some())
}
