//! Query handlers for the WrapLock contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    AdminResponse, ContractMappingResponse, ContractMappingsResponse, EncodeXferResponse,
    GlobalConfigResponse, IsProcessedResponse, ProcessedReceiptResponse,
    ProcessedReceiptsResponse, ReserveResponse, ReservesResponse, TransferLogResponse,
    TransferRecordResponse,
};
use crate::replay::is_processed;
use crate::reserve::reserves_for;
use crate::state::{
    contract_mappings, processed, ContractMapping, ProcessedReceipt, TransferRecord, ADMIN,
    GLOBAL, RESERVES, TRANSFER_LOG, TRANSFER_LOG_ROOT, TRANSFER_SEQ,
};
use common::{ExtendedAsset, TransferMessage};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    Ok(AdminResponse {
        admin: ADMIN.load(deps.storage)?,
    })
}

/// Global config, or None before `Init`.
pub fn query_global_config(deps: Deps) -> StdResult<Option<GlobalConfigResponse>> {
    Ok(GLOBAL
        .may_load(deps.storage)?
        .map(|c| GlobalConfigResponse {
            chain_id: Binary::from(c.chain_id.to_vec()),
            bridge_contract: c.bridge_contract,
            paired_chain_id: Binary::from(c.paired_chain_id.to_vec()),
            enabled: c.enabled,
        }))
}

// ============================================================================
// Contract Registry Queries
// ============================================================================

fn mapping_response(m: ContractMapping) -> ContractMappingResponse {
    ContractMappingResponse {
        native_token_contract: m.native_token_contract,
        paired_wraptoken_contract: m.paired_wraptoken_contract,
    }
}

pub fn query_contract_mapping(
    deps: Deps,
    native_token_contract: String,
) -> StdResult<Option<ContractMappingResponse>> {
    let native = deps.api.addr_validate(&native_token_contract)?;
    Ok(contract_mappings()
        .may_load(deps.storage, &native)?
        .map(mapping_response))
}

pub fn query_contract_mapping_by_wraptoken(
    deps: Deps,
    paired_wraptoken_contract: String,
) -> StdResult<Option<ContractMappingResponse>> {
    Ok(contract_mappings()
        .idx
        .wraptoken
        .item(deps.storage, paired_wraptoken_contract)?
        .map(|(_, m)| mapping_response(m)))
}

/// Paginated list of mappings ordered by native token contract.
pub fn query_contract_mappings(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ContractMappingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let mappings = contract_mappings()
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, m)| mapping_response(m)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ContractMappingsResponse { mappings })
}

// ============================================================================
// Reserve Queries
// ============================================================================

pub fn query_reserve(deps: Deps, token_contract: String, symbol: String) -> StdResult<ReserveResponse> {
    let token = deps.api.addr_validate(&token_contract)?;
    let row = RESERVES.may_load(deps.storage, (&token, symbol.as_str()))?;
    Ok(ReserveResponse {
        token_contract: token,
        symbol,
        precision: row.as_ref().map(|r| r.precision),
        balance: row.map(|r| r.balance).unwrap_or_default(),
    })
}

pub fn query_reserves(deps: Deps, token_contract: String) -> StdResult<ReservesResponse> {
    let token = deps.api.addr_validate(&token_contract)?;
    let reserves = reserves_for(deps.storage, &token)?
        .into_iter()
        .map(|(symbol, r)| ExtendedAsset::new(r.balance, r.precision, symbol, token.as_str()))
        .collect();
    Ok(ReservesResponse { reserves })
}

// ============================================================================
// Replay Guard Queries
// ============================================================================

pub fn query_is_processed(deps: Deps, receipt_digest: Binary) -> StdResult<IsProcessedResponse> {
    let digest = common::hash::to_bytes32(receipt_digest.as_slice()).ok_or_else(|| {
        StdError::generic_err(format!(
            "receipt_digest must be 32 bytes, got {}",
            receipt_digest.len()
        ))
    })?;
    Ok(IsProcessedResponse {
        processed: is_processed(deps.storage, &digest)?,
    })
}

fn receipt_response(r: ProcessedReceipt) -> ProcessedReceiptResponse {
    ProcessedReceiptResponse {
        id: r.id,
        receipt_digest: Binary::from(r.receipt_digest.to_vec()),
        payer: r.payer,
        processed_at: r.processed_at,
    }
}

pub fn query_processed_receipts(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ProcessedReceiptsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let receipts = processed()
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, r)| receipt_response(r)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ProcessedReceiptsResponse { receipts })
}

// ============================================================================
// Transfer Log Queries
// ============================================================================

fn record_response(r: TransferRecord) -> TransferRecordResponse {
    TransferRecordResponse {
        seq: r.seq,
        xfer: r.xfer,
        digest: Binary::from(r.digest.to_vec()),
        log_root: Binary::from(r.log_root.to_vec()),
        block_height: r.block_height,
    }
}

pub fn query_transfer_record(deps: Deps, seq: u64) -> StdResult<Option<TransferRecordResponse>> {
    Ok(TRANSFER_LOG
        .may_load(deps.storage, seq)?
        .map(record_response))
}

pub fn query_transfer_log(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransferLogResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let entries = TRANSFER_LOG
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, r)| record_response(r)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TransferLogResponse {
        entries,
        count: TRANSFER_SEQ.may_load(deps.storage)?.unwrap_or_default(),
        log_root: Binary::from(
            TRANSFER_LOG_ROOT
                .may_load(deps.storage)?
                .unwrap_or_default()
                .to_vec(),
        ),
    })
}

/// Encode a transfer the way `EmitXfer` logs it, for off-chain provers.
pub fn query_encode_xfer(xfer: TransferMessage) -> StdResult<EncodeXferResponse> {
    xfer.quantity.validate()?;
    Ok(EncodeXferResponse {
        data: Binary::from(xfer.encode()),
        digest: Binary::from(xfer.digest().to_vec()),
    })
}
