//! Release handlers (WithdrawA/B and CancelA/B).
//!
//! All four entry points run the same algorithm and differ only in which
//! block proof shape is checked and who receives the tokens:
//! - withdraw: the paired chain retired wrapped tokens; pay the beneficiary
//! - cancel: the paired chain refused a transfer; refund the original owner
//!
//! The replay guard insert, the reserve debit and the outbound CW20 transfer
//! all commit together or not at all.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::admin::ensure_enabled;
use crate::execute::registry::registered_mapping;
use crate::replay::add_or_assert;
use crate::reserve::sub_reserve;
use crate::verifier::{verify_action, BlockProof};
use common::{bytes32_to_hex, ActionProof};

/// Who a release pays out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTo {
    /// `xfer.beneficiary` (withdraw)
    Beneficiary,
    /// `xfer.owner` (cancel)
    Owner,
}

impl ReleaseTo {
    fn method(self) -> &'static str {
        match self {
            ReleaseTo::Beneficiary => "withdraw",
            ReleaseTo::Owner => "cancel",
        }
    }
}

/// Verify a proven transfer and release the locked tokens it refers to.
///
/// The tx sender is the prover and is recorded as payer of the replay row.
pub fn execute_release<P: BlockProof>(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    blockproof: P,
    actionproof: ActionProof,
    to: ReleaseTo,
) -> Result<Response, ContractError> {
    let config = ensure_enabled(deps.storage)?;

    let verified = verify_action(deps.as_ref(), &config, blockproof, actionproof)?;
    let quantity = &verified.xfer.quantity;

    let token = deps
        .api
        .addr_validate(&quantity.contract)
        .map_err(|_| ContractError::UnregisteredContract {
            contract: quantity.contract.clone(),
        })?;
    let mapping = registered_mapping(deps.as_ref(), &token)?;
    if verified.account != mapping.paired_wraptoken_contract {
        return Err(ContractError::ProofAccountMismatch {
            expected: mapping.paired_wraptoken_contract,
            got: verified.account,
        });
    }
    if quantity.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "release amount must be greater than zero".to_string(),
        });
    }

    let receipt_id = add_or_assert(
        deps.storage,
        &verified.receipt_digest,
        &info.sender,
        env.block.time,
    )?;
    let remaining = sub_reserve(deps.storage, &token, quantity)?;

    let recipient = match to {
        ReleaseTo::Beneficiary => &verified.xfer.beneficiary,
        ReleaseTo::Owner => &verified.xfer.owner,
    };
    let recipient = deps.api.addr_validate(recipient)?;

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: quantity.amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", to.method())
        .add_attribute("proof", P::KIND)
        .add_attribute("prover", info.sender)
        .add_attribute("receipt_digest", bytes32_to_hex(&verified.receipt_digest))
        .add_attribute("receipt_id", receipt_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("reserve_remaining", remaining.to_string()))
}
