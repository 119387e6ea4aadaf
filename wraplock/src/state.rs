//! State definitions for the WrapLock contract
//!
//! Tables:
//! - `global` singleton: chain ids, verifier contract, enable flag
//! - `contract_mappings`: native token contract -> paired wraptoken contract,
//!   with a unique index on the wraptoken side
//! - `reserves`: custodied balance per (token contract, symbol)
//! - `processed`: consumed receipt digests, unique index on the digest
//! - `transfer_log`: append-only log of emitted transfer messages

use common::TransferMessage;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, UniqueIndex};

// ============================================================================
// Core Configuration
// ============================================================================

/// Global bridge configuration, created once by `Init`.
#[cw_serde]
pub struct GlobalConfig {
    /// Id of the chain running this contract
    pub chain_id: [u8; 32],
    /// Verification contract queried for block and action proofs
    pub bridge_contract: Addr,
    /// Id of the chain hosting the wrapped tokens
    pub paired_chain_id: [u8; 32],
    /// Whether deposits, withdrawals and cancels are accepted
    pub enabled: bool,
}

/// Native token contract paired with its wraptoken contract on the other chain.
#[cw_serde]
pub struct ContractMapping {
    pub native_token_contract: Addr,
    pub paired_wraptoken_contract: String,
}

/// Locked balance of one asset.
#[cw_serde]
pub struct Reserve {
    pub precision: u8,
    pub balance: Uint128,
}

/// A consumed proof.
#[cw_serde]
pub struct ProcessedReceipt {
    pub id: u64,
    pub receipt_digest: [u8; 32],
    /// Prover whose submission created this row
    pub payer: Addr,
    pub processed_at: Timestamp,
}

/// Entry of the transfer log.
///
/// `log_root` commits to this entry and every entry before it, so a peer
/// holding any root can check inclusion and ordering of earlier entries.
#[cw_serde]
pub struct TransferRecord {
    pub seq: u64,
    pub xfer: TransferMessage,
    /// keccak256 of the canonical encoding of `xfer`
    pub digest: [u8; 32],
    pub log_root: [u8; 32],
    pub block_height: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:wraplock";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core State Storage
// ============================================================================

/// Administrative authority, fixed at instantiation
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Global config singleton; absent until `Init`
pub const GLOBAL: Item<GlobalConfig> = Item::new("global");

/// Custodied balances
/// Key: (token contract, symbol), Value: Reserve
pub const RESERVES: Map<(&Addr, &str), Reserve> = Map::new("reserves");

// ============================================================================
// Contract Registry
// ============================================================================

pub struct ContractMappingIndexes<'a> {
    pub wraptoken: UniqueIndex<'a, String, ContractMapping>,
}

impl<'a> IndexList<ContractMapping> for ContractMappingIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<ContractMapping>> + '_> {
        let v: Vec<&dyn Index<ContractMapping>> = vec![&self.wraptoken];
        Box::new(v.into_iter())
    }
}

/// Contract mappings
/// Key: native token contract, unique index: paired wraptoken contract
pub fn contract_mappings<'a>(
) -> IndexedMap<'a, &'a Addr, ContractMapping, ContractMappingIndexes<'a>> {
    let indexes = ContractMappingIndexes {
        wraptoken: UniqueIndex::new(
            |m: &ContractMapping| m.paired_wraptoken_contract.clone(),
            "contract_mappings__wraptoken",
        ),
    };
    IndexedMap::new("contract_mappings", indexes)
}

// ============================================================================
// Replay Guard
// ============================================================================

pub struct ProcessedIndexes<'a> {
    pub digest: UniqueIndex<'a, Vec<u8>, ProcessedReceipt>,
}

impl<'a> IndexList<ProcessedReceipt> for ProcessedIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<ProcessedReceipt>> + '_> {
        let v: Vec<&dyn Index<ProcessedReceipt>> = vec![&self.digest];
        Box::new(v.into_iter())
    }
}

/// Processed receipts
/// Key: sequence id, unique index: receipt digest
pub fn processed<'a>() -> IndexedMap<'a, u64, ProcessedReceipt, ProcessedIndexes<'a>> {
    let indexes = ProcessedIndexes {
        digest: UniqueIndex::new(
            |r: &ProcessedReceipt| r.receipt_digest.to_vec(),
            "processed__digest",
        ),
    };
    IndexedMap::new("processed", indexes)
}

/// Next processed receipt id
pub const PROCESSED_SEQ: Item<u64> = Item::new("processed_seq");

// ============================================================================
// Transfer Log
// ============================================================================

/// Emitted transfers
/// Key: sequence number, Value: TransferRecord
pub const TRANSFER_LOG: Map<u64, TransferRecord> = Map::new("transfer_log");

/// Next transfer log sequence number
pub const TRANSFER_SEQ: Item<u64> = Item::new("transfer_seq");

/// Root after the most recent entry (all zeros while the log is empty)
pub const TRANSFER_LOG_ROOT: Item<[u8; 32]> = Item::new("transfer_log_root");
