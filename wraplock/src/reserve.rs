//! Reserve Ledger
//!
//! The reserve is the single source of truth for how much of each native
//! asset is held in custody. It only grows through deposits and only shrinks
//! through proof-backed releases; `sub_reserve` is the guard that prevents
//! releasing more than was locked.
//!
//! Assets are keyed by `(token contract, symbol)`. The precision recorded by
//! the first deposit is fixed for the life of the row.

use common::ExtendedAsset;
use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Reserve, RESERVES};

/// Credit `asset.amount` to the reserve, creating the row if needed.
///
/// Returns the new balance.
pub fn add_reserve(
    storage: &mut dyn Storage,
    contract: &Addr,
    asset: &ExtendedAsset,
) -> Result<Uint128, ContractError> {
    let key = (contract, asset.symbol.as_str());
    let reserve = match RESERVES.may_load(storage, key)? {
        Some(existing) => {
            check_precision(&existing, asset)?;
            Reserve {
                precision: existing.precision,
                balance: existing
                    .balance
                    .checked_add(asset.amount)
                    .map_err(StdError::from)?,
            }
        }
        None => Reserve {
            precision: asset.precision,
            balance: asset.amount,
        },
    };
    RESERVES.save(storage, key, &reserve)?;
    Ok(reserve.balance)
}

/// Debit `asset.amount` from the reserve.
///
/// Fails with `InsufficientReserve` if less than `asset.amount` is locked;
/// a missing row counts as zero. Returns the remaining balance.
pub fn sub_reserve(
    storage: &mut dyn Storage,
    contract: &Addr,
    asset: &ExtendedAsset,
) -> Result<Uint128, ContractError> {
    let key = (contract, asset.symbol.as_str());
    let mut reserve = RESERVES
        .may_load(storage, key)?
        .ok_or_else(|| ContractError::InsufficientReserve {
            symbol: asset.symbol.clone(),
            available: Uint128::zero(),
            requested: asset.amount,
        })?;
    check_precision(&reserve, asset)?;

    if reserve.balance < asset.amount {
        return Err(ContractError::InsufficientReserve {
            symbol: asset.symbol.clone(),
            available: reserve.balance,
            requested: asset.amount,
        });
    }

    reserve.balance -= asset.amount;
    RESERVES.save(storage, key, &reserve)?;
    Ok(reserve.balance)
}

/// Current balance of one asset (zero if never deposited).
pub fn reserve_balance(storage: &dyn Storage, contract: &Addr, symbol: &str) -> StdResult<Uint128> {
    Ok(RESERVES
        .may_load(storage, (contract, symbol))?
        .map(|r| r.balance)
        .unwrap_or_default())
}

/// All reserve rows held for a token contract, ordered by symbol.
pub fn reserves_for(storage: &dyn Storage, contract: &Addr) -> StdResult<Vec<(String, Reserve)>> {
    RESERVES
        .prefix(contract)
        .range(storage, None, None, Order::Ascending)
        .collect()
}

fn check_precision(reserve: &Reserve, asset: &ExtendedAsset) -> Result<(), ContractError> {
    if reserve.precision != asset.precision {
        return Err(ContractError::PrecisionMismatch {
            symbol: asset.symbol.clone(),
            expected: reserve.precision,
            got: asset.precision,
        });
    }
    Ok(())
}
