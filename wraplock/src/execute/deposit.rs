//! Deposit handlers (CW20 Receive and EmitXfer).
//!
//! A deposit arrives as a CW20 `Send` to this contract: the token contract
//! calls `Receive` in the same transaction that moved the tokens into custody.
//! The handler credits the reserve and schedules a self-issued `EmitXfer`,
//! which appends the canonical transfer message to the transfer log. That log
//! entry is what the paired chain later proves against.

use cosmwasm_std::{
    from_json, to_json_binary, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, WasmMsg,
};
use cw20::{Cw20QueryMsg, Cw20ReceiveMsg, TokenInfoResponse};

use crate::error::ContractError;
use crate::execute::admin::ensure_enabled;
use crate::execute::registry::registered_mapping;
use crate::msg::{ExecuteMsg, ReceiveMsg};
use crate::reserve::add_reserve;
use crate::state::{TransferRecord, TRANSFER_LOG, TRANSFER_LOG_ROOT, TRANSFER_SEQ};
use common::hash::chain_log_root;
use common::{bytes32_to_hex, validate_identity, ExtendedAsset, TransferMessage};

/// Lock tokens received through the CW20 hook.
///
/// `info.sender` is the token contract; `msg.sender` is the depositor.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    ensure_enabled(deps.storage)?;

    let token = info.sender;
    registered_mapping(deps.as_ref(), &token)?;

    let owner = deps.api.addr_validate(&msg.sender)?;
    if msg.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be greater than zero".to_string(),
        });
    }

    let memo = match from_json::<ReceiveMsg>(&msg.msg) {
        Ok(ReceiveMsg::Deposit { memo }) => memo,
        Err(e) => {
            return Err(ContractError::InvalidMemo {
                reason: e.to_string(),
            })
        }
    };
    validate_identity(&memo).map_err(|reason| ContractError::InvalidMemo { reason })?;

    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(token.to_string(), &Cw20QueryMsg::TokenInfo {})?;
    let quantity = ExtendedAsset::new(
        msg.amount,
        token_info.decimals,
        token_info.symbol,
        token.to_string(),
    );
    quantity.validate()?;

    let reserve = add_reserve(deps.storage, &token, &quantity)?;

    let xfer = TransferMessage {
        owner: owner.to_string(),
        quantity,
        beneficiary: memo.clone(),
        memo,
    };

    let emit = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::EmitXfer { xfer: xfer.clone() })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(emit)
        .add_attribute("method", "deposit")
        .add_attribute("owner", xfer.owner)
        .add_attribute("beneficiary", xfer.beneficiary)
        .add_attribute("quantity", xfer.quantity.to_string())
        .add_attribute("reserve", reserve.to_string()))
}

/// Append `xfer` to the transfer log. Only the contract itself may call this.
pub fn execute_emit_xfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    xfer: TransferMessage,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::UnauthorizedEmitter);
    }

    let seq = TRANSFER_SEQ.may_load(deps.storage)?.unwrap_or_default();
    let prev_root = TRANSFER_LOG_ROOT
        .may_load(deps.storage)?
        .unwrap_or_default();

    let data = xfer.encode();
    let digest = common::keccak256(&data);
    let log_root = chain_log_root(&prev_root, &digest);

    let record = TransferRecord {
        seq,
        xfer,
        digest,
        log_root,
        block_height: env.block.height,
    };
    TRANSFER_LOG.save(deps.storage, seq, &record)?;
    TRANSFER_SEQ.save(deps.storage, &(seq + 1))?;
    TRANSFER_LOG_ROOT.save(deps.storage, &log_root)?;

    let event = Event::new("emitxfer")
        .add_attribute("seq", seq.to_string())
        .add_attribute("owner", &record.xfer.owner)
        .add_attribute("quantity", record.xfer.quantity.to_string())
        .add_attribute("beneficiary", &record.xfer.beneficiary)
        .add_attribute("memo", &record.xfer.memo)
        .add_attribute("data", hex::encode(&data))
        .add_attribute("digest", bytes32_to_hex(&digest))
        .add_attribute("log_root", bytes32_to_hex(&log_root));

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", "emitxfer")
        .add_attribute("seq", seq.to_string()))
}
