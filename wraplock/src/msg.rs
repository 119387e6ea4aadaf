//! Message types for the WrapLock contract
//!
//! This module defines all messages for instantiation, execution, and queries,
//! plus the payload carried inside a CW20 `Send` to make a deposit.

use common::{ActionProof, ExtendedAsset, HeavyProof, LightProof, TransferMessage};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Administrative authority; defaults to the instantiating sender
    pub admin: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Admin
    // ========================================================================
    /// Create the global config (once)
    ///
    /// Authorization: Admin only
    Init {
        /// Id of this chain (32 bytes)
        chain_id: Binary,
        /// Verification contract answering `VerifierQueryMsg`
        bridge_contract: String,
        /// Id of the chain hosting the wraptoken contracts (32 bytes)
        paired_chain_id: Binary,
    },

    /// Accept deposits, withdrawals and cancels
    ///
    /// Authorization: Admin only
    Enable {},

    /// Refuse deposits, withdrawals and cancels
    ///
    /// Authorization: Admin only
    Disable {},

    // ========================================================================
    // Contract Registry
    // ========================================================================
    /// Pair a native CW20 contract with its wraptoken contract
    ///
    /// Authorization: Admin only
    AddContract {
        native_token_contract: String,
        paired_wraptoken_contract: String,
    },

    /// Remove a pairing; refused while any reserve of the token is locked
    ///
    /// Authorization: Admin only
    DelContract { native_token_contract: String },

    // ========================================================================
    // Deposit
    // ========================================================================
    /// Deposit CW20 tokens (called via CW20 send with a `ReceiveMsg`)
    /// Implements CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    /// Append a transfer to the transfer log
    ///
    /// Authorization: the contract itself (dispatched by `Receive`)
    EmitXfer { xfer: TransferMessage },

    // ========================================================================
    // Release
    // ========================================================================
    /// Pay the beneficiary of a retired transfer, heavy block proof
    ///
    /// Authorization: Anyone (the sender pays for the replay record)
    WithdrawA {
        blockproof: HeavyProof,
        actionproof: ActionProof,
    },

    /// Pay the beneficiary of a retired transfer, light block proof
    WithdrawB {
        blockproof: LightProof,
        actionproof: ActionProof,
    },

    /// Refund the owner of a refused transfer, heavy block proof
    CancelA {
        blockproof: HeavyProof,
        actionproof: ActionProof,
    },

    /// Refund the owner of a refused transfer, light block proof
    CancelB {
        blockproof: LightProof,
        actionproof: ActionProof,
    },
}

/// Payload of a CW20 `Send` to this contract
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent tokens; `memo` names the beneficiary on the paired chain
    Deposit { memo: String },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Core Queries
    // ========================================================================
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},

    /// Returns the global config, if initialized
    #[returns(Option<GlobalConfigResponse>)]
    GlobalConfig {},

    // ========================================================================
    // Contract Registry Queries
    // ========================================================================
    /// Mapping keyed by native token contract
    #[returns(Option<ContractMappingResponse>)]
    ContractMapping { native_token_contract: String },

    /// Mapping looked up through the wraptoken side
    #[returns(Option<ContractMappingResponse>)]
    ContractMappingByWraptoken { paired_wraptoken_contract: String },

    /// List all mappings (paginated by native token contract)
    #[returns(ContractMappingsResponse)]
    ContractMappings {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Reserve Queries
    // ========================================================================
    /// Locked balance of one asset
    #[returns(ReserveResponse)]
    Reserve {
        token_contract: String,
        symbol: String,
    },

    /// All locked balances for a token contract
    #[returns(ReservesResponse)]
    Reserves { token_contract: String },

    // ========================================================================
    // Replay Guard Queries
    // ========================================================================
    /// Whether a receipt digest (32 bytes) has been consumed
    #[returns(IsProcessedResponse)]
    IsProcessed { receipt_digest: Binary },

    /// List consumed receipts (paginated by id)
    #[returns(ProcessedReceiptsResponse)]
    ProcessedReceipts {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Transfer Log Queries
    // ========================================================================
    /// One entry of the transfer log
    #[returns(Option<TransferRecordResponse>)]
    TransferRecord { seq: u64 },

    /// List transfer log entries (paginated by seq) with the current root
    #[returns(TransferLogResponse)]
    TransferLog {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Canonical encoding and digest of a transfer message
    #[returns(EncodeXferResponse)]
    EncodeXfer { xfer: TransferMessage },
}

// ============================================================================
// Response Types - Core
// ============================================================================

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct GlobalConfigResponse {
    pub chain_id: Binary,
    pub bridge_contract: Addr,
    pub paired_chain_id: Binary,
    pub enabled: bool,
}

// ============================================================================
// Response Types - Registry
// ============================================================================

#[cw_serde]
pub struct ContractMappingResponse {
    pub native_token_contract: Addr,
    pub paired_wraptoken_contract: String,
}

#[cw_serde]
pub struct ContractMappingsResponse {
    pub mappings: Vec<ContractMappingResponse>,
}

// ============================================================================
// Response Types - Reserves
// ============================================================================

#[cw_serde]
pub struct ReserveResponse {
    pub token_contract: Addr,
    pub symbol: String,
    /// None until the first deposit of this asset
    pub precision: Option<u8>,
    pub balance: Uint128,
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserves: Vec<ExtendedAsset>,
}

// ============================================================================
// Response Types - Replay Guard
// ============================================================================

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct ProcessedReceiptResponse {
    pub id: u64,
    pub receipt_digest: Binary,
    pub payer: Addr,
    pub processed_at: Timestamp,
}

#[cw_serde]
pub struct ProcessedReceiptsResponse {
    pub receipts: Vec<ProcessedReceiptResponse>,
}

// ============================================================================
// Response Types - Transfer Log
// ============================================================================

#[cw_serde]
pub struct TransferRecordResponse {
    pub seq: u64,
    pub xfer: TransferMessage,
    pub digest: Binary,
    pub log_root: Binary,
    pub block_height: u64,
}

#[cw_serde]
pub struct TransferLogResponse {
    pub entries: Vec<TransferRecordResponse>,
    /// Number of entries ever appended
    pub count: u64,
    /// Root after the last entry (all zeros while empty)
    pub log_root: Binary,
}

#[cw_serde]
pub struct EncodeXferResponse {
    pub data: Binary,
    pub digest: Binary,
}
