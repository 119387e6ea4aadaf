//! WrapLock Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `reserve`, `replay`, `verifier` - the components the handlers compose

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_contract, execute_del_contract, execute_disable, execute_emit_xfer,
    execute_enable, execute_init, execute_receive, execute_release, ReleaseTo,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_admin, query_contract_mapping, query_contract_mapping_by_wraptoken,
    query_contract_mappings, query_encode_xfer, query_global_config, query_is_processed,
    query_processed_receipts, query_reserve, query_reserves, query_transfer_log,
    query_transfer_record,
};
use crate::state::{
    ADMIN, CONTRACT_NAME, CONTRACT_VERSION, PROCESSED_SEQ, TRANSFER_LOG_ROOT, TRANSFER_SEQ,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    ADMIN.save(deps.storage, &admin)?;

    PROCESSED_SEQ.save(deps.storage, &0u64)?;
    TRANSFER_SEQ.save(deps.storage, &0u64)?;
    TRANSFER_LOG_ROOT.save(deps.storage, &[0u8; 32])?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("version", CONTRACT_VERSION))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Admin
        ExecuteMsg::Init {
            chain_id,
            bridge_contract,
            paired_chain_id,
        } => execute_init(deps, info, chain_id, bridge_contract, paired_chain_id),
        ExecuteMsg::Enable {} => execute_enable(deps, info),
        ExecuteMsg::Disable {} => execute_disable(deps, info),

        // Contract registry
        ExecuteMsg::AddContract {
            native_token_contract,
            paired_wraptoken_contract,
        } => execute_add_contract(deps, info, native_token_contract, paired_wraptoken_contract),
        ExecuteMsg::DelContract {
            native_token_contract,
        } => execute_del_contract(deps, info, native_token_contract),

        // Deposit
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::EmitXfer { xfer } => execute_emit_xfer(deps, env, info, xfer),

        // Release
        ExecuteMsg::WithdrawA {
            blockproof,
            actionproof,
        } => execute_release(
            deps,
            env,
            info,
            blockproof,
            actionproof,
            ReleaseTo::Beneficiary,
        ),
        ExecuteMsg::WithdrawB {
            blockproof,
            actionproof,
        } => execute_release(
            deps,
            env,
            info,
            blockproof,
            actionproof,
            ReleaseTo::Beneficiary,
        ),
        ExecuteMsg::CancelA {
            blockproof,
            actionproof,
        } => execute_release(deps, env, info, blockproof, actionproof, ReleaseTo::Owner),
        ExecuteMsg::CancelB {
            blockproof,
            actionproof,
        } => execute_release(deps, env, info, blockproof, actionproof, ReleaseTo::Owner),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::GlobalConfig {} => to_json_binary(&query_global_config(deps)?),

        // Contract registry queries
        QueryMsg::ContractMapping {
            native_token_contract,
        } => to_json_binary(&query_contract_mapping(deps, native_token_contract)?),
        QueryMsg::ContractMappingByWraptoken {
            paired_wraptoken_contract,
        } => to_json_binary(&query_contract_mapping_by_wraptoken(
            deps,
            paired_wraptoken_contract,
        )?),
        QueryMsg::ContractMappings { start_after, limit } => {
            to_json_binary(&query_contract_mappings(deps, start_after, limit)?)
        }

        // Reserve queries
        QueryMsg::Reserve {
            token_contract,
            symbol,
        } => to_json_binary(&query_reserve(deps, token_contract, symbol)?),
        QueryMsg::Reserves { token_contract } => {
            to_json_binary(&query_reserves(deps, token_contract)?)
        }

        // Replay guard queries
        QueryMsg::IsProcessed { receipt_digest } => {
            to_json_binary(&query_is_processed(deps, receipt_digest)?)
        }
        QueryMsg::ProcessedReceipts { start_after, limit } => {
            to_json_binary(&query_processed_receipts(deps, start_after, limit)?)
        }

        // Transfer log queries
        QueryMsg::TransferRecord { seq } => to_json_binary(&query_transfer_record(deps, seq)?),
        QueryMsg::TransferLog { start_after, limit } => {
            to_json_binary(&query_transfer_log(deps, start_after, limit)?)
        }
        QueryMsg::EncodeXfer { xfer } => to_json_binary(&query_encode_xfer(xfer)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
