//! Canonical cross-chain transfer message.
//!
//! A `TransferMessage` is emitted by the lock contract whenever tokens enter
//! custody, and the paired chain emits the same structure when wrapped tokens
//! are retired. Proofs on either side are made against the bytes produced by
//! [`TransferMessage::encode`], so this layout is frozen.
//!
//! # Byte Layout
//! | Field                | Encoding                         |
//! |----------------------|----------------------------------|
//! | owner                | varuint32 length + UTF-8         |
//! | quantity.amount      | u128 little-endian (16 bytes)    |
//! | quantity.precision   | u8                               |
//! | quantity.symbol      | varuint32 length + UTF-8         |
//! | quantity.contract    | varuint32 length + UTF-8         |
//! | beneficiary          | varuint32 length + UTF-8         |
//! | memo                 | varuint32 length + UTF-8         |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult};

use crate::asset::ExtendedAsset;
use crate::codec::{Decoder, Encoder};
use crate::hash::keccak256;

/// Action name under which transfer messages are emitted on both chains.
pub const EMITXFER_ACTION: &str = "emitxfer";

/// Bounds on an account or contract identity of the paired chain.
pub const MIN_IDENTITY_LEN: usize = 3;
pub const MAX_IDENTITY_LEN: usize = 90;

/// Check `id` is a well-formed paired-chain identity: 3-90 bytes of
/// `[a-z0-9._-]`.
pub fn validate_identity(id: &str) -> Result<(), String> {
    if !(MIN_IDENTITY_LEN..=MAX_IDENTITY_LEN).contains(&id.len()) {
        return Err(format!(
            "identity must be {}-{} bytes, got {}",
            MIN_IDENTITY_LEN,
            MAX_IDENTITY_LEN,
            id.len()
        ));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')))
    {
        return Err(format!("identity contains invalid character {:?}", c));
    }
    Ok(())
}

#[cw_serde]
pub struct TransferMessage {
    /// Account the tokens came from
    pub owner: String,
    /// What was locked or retired
    pub quantity: ExtendedAsset,
    /// Account to credit on the other chain
    pub beneficiary: String,
    /// Free-text memo carried verbatim
    pub memo: String,
}

impl TransferMessage {
    pub fn encode(&self) -> Vec<u8> {
        Encoder::new()
            .str(&self.owner)
            .u128(self.quantity.amount.u128())
            .u8(self.quantity.precision)
            .str(&self.quantity.symbol)
            .str(&self.quantity.contract)
            .str(&self.beneficiary)
            .str(&self.memo)
            .finish()
    }

    /// Decode and validate a message; the input must be consumed exactly.
    pub fn decode(data: &[u8]) -> StdResult<Self> {
        let mut dec = Decoder::new("TransferMessage", data);
        let owner = dec.string()?;
        let amount = dec.u128()?;
        let precision = dec.u8()?;
        let symbol = dec.string()?;
        let contract = dec.string()?;
        let beneficiary = dec.string()?;
        let memo = dec.string()?;
        dec.finish()?;

        let quantity = ExtendedAsset::new(amount, precision, symbol, contract);
        quantity
            .validate()
            .map_err(|e| StdError::parse_err("TransferMessage", e))?;

        Ok(Self {
            owner,
            quantity,
            beneficiary,
            memo,
        })
    }

    /// keccak256 of the canonical encoding
    pub fn digest(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }
}
