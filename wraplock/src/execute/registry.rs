//! Contract registry handlers.
//!
//! Maintains the native token contract <-> paired wraptoken contract
//! bijection. Both directions are unique: the native contract is the primary
//! key and the wraptoken contract carries a unique index.

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::admin::ensure_admin;
use crate::reserve::reserves_for;
use crate::state::{contract_mappings, ContractMapping};
use common::validate_identity;

/// Mapping registered for `contract`, or `UnregisteredContract`.
pub fn registered_mapping(deps: Deps, contract: &Addr) -> Result<ContractMapping, ContractError> {
    contract_mappings()
        .may_load(deps.storage, contract)?
        .ok_or_else(|| ContractError::UnregisteredContract {
            contract: contract.to_string(),
        })
}

/// Register a new pairing.
pub fn execute_add_contract(
    deps: DepsMut,
    info: MessageInfo,
    native_token_contract: String,
    paired_wraptoken_contract: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;

    let native = deps.api.addr_validate(&native_token_contract)?;
    validate_identity(&paired_wraptoken_contract).map_err(|reason| {
        ContractError::Std(cosmwasm_std::StdError::generic_err(format!(
            "invalid wraptoken contract: {}",
            reason
        )))
    })?;

    let mappings = contract_mappings();
    let native_taken = mappings.may_load(deps.storage, &native)?.is_some();
    let wraptoken_taken = mappings
        .idx
        .wraptoken
        .item(deps.storage, paired_wraptoken_contract.clone())?
        .is_some();
    if native_taken || wraptoken_taken {
        return Err(ContractError::DuplicateMapping {
            native: native.to_string(),
            wraptoken: paired_wraptoken_contract,
        });
    }

    let mapping = ContractMapping {
        native_token_contract: native.clone(),
        paired_wraptoken_contract,
    };
    mappings.save(deps.storage, &native, &mapping)?;

    Ok(Response::new()
        .add_attribute("method", "addcontract")
        .add_attribute("native_token_contract", native)
        .add_attribute("paired_wraptoken_contract", mapping.paired_wraptoken_contract))
}

/// Remove a pairing. Refused while any reserve of the token is still locked.
pub fn execute_del_contract(
    deps: DepsMut,
    info: MessageInfo,
    native_token_contract: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;

    let native = deps.api.addr_validate(&native_token_contract)?;
    let mapping = contract_mappings()
        .may_load(deps.storage, &native)?
        .ok_or_else(|| ContractError::UnknownMapping {
            contract: native.to_string(),
        })?;

    if let Some((symbol, reserve)) = reserves_for(deps.storage, &native)?
        .into_iter()
        .find(|(_, r)| r.balance > Uint128::zero())
    {
        return Err(ContractError::ReserveOutstanding {
            contract: native.to_string(),
            symbol,
            balance: reserve.balance,
        });
    }

    contract_mappings().remove(deps.storage, &native)?;

    Ok(Response::new()
        .add_attribute("method", "delcontract")
        .add_attribute("native_token_contract", native)
        .add_attribute("paired_wraptoken_contract", mapping.paired_wraptoken_contract))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reserve::{add_reserve, sub_reserve};
    use crate::state::ADMIN;
    use common::ExtendedAsset;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    fn add(deps: DepsMut, native: &str, wrapped: &str) -> Result<Response, ContractError> {
        execute_add_contract(
            deps,
            mock_info("admin", &[]),
            native.to_string(),
            wrapped.to_string(),
        )
    }

    fn del(deps: DepsMut, native: &str) -> Result<Response, ContractError> {
        execute_del_contract(deps, mock_info("admin", &[]), native.to_string())
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        let mut deps = mock_dependencies();
        ADMIN
            .save(deps.as_mut().storage, &Addr::unchecked("admin"))
            .unwrap();

        add(deps.as_mut(), "tokena", "wrapa").unwrap();

        // same native, different wraptoken
        assert!(matches!(
            add(deps.as_mut(), "tokena", "wrapb").unwrap_err(),
            ContractError::DuplicateMapping { .. }
        ));
        // different native, same wraptoken
        assert!(matches!(
            add(deps.as_mut(), "tokenb", "wrapa").unwrap_err(),
            ContractError::DuplicateMapping { .. }
        ));

        add(deps.as_mut(), "tokenb", "wrapb").unwrap();
        let mapping = registered_mapping(deps.as_ref(), &Addr::unchecked("tokenb")).unwrap();
        assert_eq!(mapping.paired_wraptoken_contract, "wrapb");
    }

    #[test]
    fn test_delete_frees_both_sides() {
        let mut deps = mock_dependencies();
        ADMIN
            .save(deps.as_mut().storage, &Addr::unchecked("admin"))
            .unwrap();

        add(deps.as_mut(), "tokena", "wrapa").unwrap();
        del(deps.as_mut(), "tokena").unwrap();

        assert!(matches!(
            registered_mapping(deps.as_ref(), &Addr::unchecked("tokena")).unwrap_err(),
            ContractError::UnregisteredContract { .. }
        ));
        assert_eq!(
            del(deps.as_mut(), "tokena").unwrap_err(),
            ContractError::UnknownMapping {
                contract: "tokena".to_string()
            }
        );

        // wraptoken can be paired again
        add(deps.as_mut(), "tokenb", "wrapa").unwrap();
    }

    #[test]
    fn test_delete_refused_with_outstanding_reserve() {
        let mut deps = mock_dependencies();
        ADMIN
            .save(deps.as_mut().storage, &Addr::unchecked("admin"))
            .unwrap();
        add(deps.as_mut(), "tokena", "wrapa").unwrap();

        let token = Addr::unchecked("tokena");
        let asset = ExtendedAsset::new(50u128, 6, "TKA", "tokena");
        add_reserve(deps.as_mut().storage, &token, &asset).unwrap();

        assert_eq!(
            del(deps.as_mut(), "tokena").unwrap_err(),
            ContractError::ReserveOutstanding {
                contract: "tokena".to_string(),
                symbol: "TKA".to_string(),
                balance: Uint128::new(50),
            }
        );

        // a drained row does not block removal
        sub_reserve(deps.as_mut().storage, &token, &asset).unwrap();
        del(deps.as_mut(), "tokena").unwrap();
    }

    #[test]
    fn test_registry_requires_admin() {
        let mut deps = mock_dependencies();
        ADMIN
            .save(deps.as_mut().storage, &Addr::unchecked("admin"))
            .unwrap();

        let err = execute_add_contract(
            deps.as_mut(),
            mock_info("mallory", &[]),
            "tokena".to_string(),
            "wrapa".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_wraptoken_must_be_an_identity() {
        let mut deps = mock_dependencies();
        ADMIN
            .save(deps.as_mut().storage, &Addr::unchecked("admin"))
            .unwrap();
        assert!(add(deps.as_mut(), "tokena", "Wrap A").is_err());
    }
}
