//! Admin operations handlers.
//!
//! This module handles:
//! - One-time bootstrap of the global config (`Init`)
//! - Enable/disable of the bridge gate
//!
//! Plus the guards every other handler uses to check lifecycle state.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{GlobalConfig, ADMIN, GLOBAL};
use common::bytes32_to_hex;

// ============================================================================
// Guards
// ============================================================================

/// Fail with `Unauthorized` unless `info.sender` is the admin.
pub fn ensure_admin(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    let admin = ADMIN.load(storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Load the global config, failing with `NotInitialized` before `Init`.
pub fn load_global(storage: &dyn Storage) -> Result<GlobalConfig, ContractError> {
    GLOBAL
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}

/// Load the global config and require the bridge to be enabled.
pub fn ensure_enabled(storage: &dyn Storage) -> Result<GlobalConfig, ContractError> {
    let config = load_global(storage)?;
    if !config.enabled {
        return Err(ContractError::Disabled);
    }
    Ok(config)
}

fn chain_id_from(raw: &Binary) -> Result<[u8; 32], ContractError> {
    common::hash::to_bytes32(raw.as_slice()).ok_or(ContractError::InvalidChainId {
        got: raw.len(),
    })
}

// ============================================================================
// Init
// ============================================================================

/// Create the global config. Callable once.
pub fn execute_init(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: Binary,
    bridge_contract: String,
    paired_chain_id: Binary,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    if GLOBAL.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let config = GlobalConfig {
        chain_id: chain_id_from(&chain_id)?,
        bridge_contract: deps.api.addr_validate(&bridge_contract)?,
        paired_chain_id: chain_id_from(&paired_chain_id)?,
        enabled: true,
    };
    GLOBAL.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "init")
        .add_attribute("chain_id", bytes32_to_hex(&config.chain_id))
        .add_attribute("bridge_contract", config.bridge_contract.to_string())
        .add_attribute("paired_chain_id", bytes32_to_hex(&config.paired_chain_id)))
}

// ============================================================================
// Enable/Disable
// ============================================================================

/// Open the gate for deposits, withdrawals and cancels.
pub fn execute_enable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_enabled(deps, info, true)
}

/// Close the gate. Registry management stays available.
pub fn execute_disable(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_enabled(deps, info, false)
}

fn set_enabled(deps: DepsMut, info: MessageInfo, enabled: bool) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    let mut config = load_global(deps.storage)?;

    config.enabled = enabled;
    GLOBAL.save(deps.storage, &config)?;

    let method = if enabled { "enable" } else { "disable" };
    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("enabled", enabled.to_string()))
}
