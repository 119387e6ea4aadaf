//! Shared cw-multi-test fixtures for WrapLock integration tests.
//!
//! The suite wires up a cw20-base token, a mock verification contract and a
//! WrapLock instance that is initialized, enabled and has the token paired
//! with `WRAPTOKEN`.
//!
//! The mock verifier accepts an action proof when the receipt's `act_digest`
//! matches the action and the proven header's `action_mroot` equals the
//! receipt digest. Light proofs must also reference a checkpointed root.

#![allow(dead_code)]

use common::{
    ActionProof, ActionReceipt, AuthenticatedBlock, BlockHeader, ExtendedAsset, HeavyProof,
    LightProof, ProvenAction, TransferMessage, VerifiedActionResponse, VerifierQueryMsg,
    EMITXFER_ACTION,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Map;

use wraplock::msg::{
    ExecuteMsg, InstantiateMsg, IsProcessedResponse, QueryMsg, ReceiveMsg, ReserveResponse,
};

// ============================================================================
// Fixture Constants
// ============================================================================

pub const ADMIN: &str = "terra1admin";
pub const ALICE: &str = "terra1alice";
pub const BOB: &str = "terra1bob";
pub const PROVER: &str = "terra1prover";

/// Paired-chain contract issuing the wrapped TOK
pub const WRAPTOKEN: &str = "wraptoken.tok";

pub const LOCAL_CHAIN: [u8; 32] = [1u8; 32];
pub const PAIRED_CHAIN: [u8; 32] = [2u8; 32];

pub const SYMBOL: &str = "TOK";
pub const DECIMALS: u8 = 4;

/// 100.0000 TOK
pub const HUNDRED_TOK: u128 = 1_000_000;

/// Alice's starting balance, 1000.0000 TOK
pub const ALICE_BALANCE: u128 = 10_000_000;

// ============================================================================
// Mock Verification Contract
// ============================================================================

#[cw_serde]
pub enum MockVerifierExecuteMsg {
    /// Trust a block merkle root for light proofs
    Checkpoint { root: Binary },
}

const CHECKPOINTS: Map<&[u8], bool> = Map::new("checkpoints");

fn verifier_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn verifier_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockVerifierExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockVerifierExecuteMsg::Checkpoint { root } => {
            CHECKPOINTS.save(deps.storage, root.as_slice(), &true)?;
            Ok(Response::new())
        }
    }
}

fn check_action(header: &BlockHeader, actionproof: &ActionProof) -> StdResult<VerifiedActionResponse> {
    if actionproof.receipt.act_digest.as_slice() != actionproof.action.digest().as_slice() {
        return Err(StdError::generic_err("act_digest does not match action"));
    }
    let digest = actionproof.receipt.digest();
    if header.action_mroot.as_slice() != digest.as_slice() {
        return Err(StdError::generic_err("receipt not under action root"));
    }
    Ok(VerifiedActionResponse {
        receipt_digest: Binary::from(digest.to_vec()),
    })
}

fn verifier_query(deps: Deps, _env: Env, msg: VerifierQueryMsg) -> StdResult<Binary> {
    let res = match msg {
        VerifierQueryMsg::CheckProofB {
            blockproof,
            actionproof,
        } => check_action(&blockproof.blocktoprove.header, &actionproof)?,
        VerifierQueryMsg::CheckProofC {
            blockproof,
            actionproof,
        } => {
            if !CHECKPOINTS.has(deps.storage, blockproof.root.as_slice()) {
                return Err(StdError::generic_err("unknown checkpoint root"));
            }
            check_action(&blockproof.header, &actionproof)?
        }
    };
    to_json_binary(&res)
}

// ============================================================================
// Contracts
// ============================================================================

fn contract_wraplock() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        wraplock::contract::execute,
        wraplock::contract::instantiate,
        wraplock::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_verifier() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(verifier_execute, verifier_instantiate, verifier_query);
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub wraplock: Addr,
    pub token: Addr,
    /// A second CW20 that is never paired
    pub other_token: Addr,
    pub verifier: Addr,
}

fn instantiate_cw20(app: &mut App, code_id: u64, name: &str, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(ADMIN),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: DECIMALS,
            initial_balances: vec![Cw20Coin {
                address: ALICE.to_string(),
                amount: Uint128::new(ALICE_BALANCE),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

impl Suite {
    /// Instantiated, initialized, enabled, with `token` paired to `WRAPTOKEN`.
    pub fn new() -> Self {
        let mut suite = Self::instantiated();
        suite.init().unwrap();
        suite
            .add_contract(ADMIN, &suite.token.to_string(), WRAPTOKEN)
            .unwrap();
        suite
    }

    /// Contracts deployed, but WrapLock not yet initialized.
    pub fn instantiated() -> Self {
        let mut app = App::default();

        let cw20_code = app.store_code(contract_cw20());
        let token = instantiate_cw20(&mut app, cw20_code, "Token", SYMBOL);
        let other_token = instantiate_cw20(&mut app, cw20_code, "Other Token", "OTK");

        let verifier_code = app.store_code(contract_verifier());
        let verifier = app
            .instantiate_contract(
                verifier_code,
                Addr::unchecked(ADMIN),
                &Empty {},
                &[],
                "verifier",
                None,
            )
            .unwrap();

        let wraplock_code = app.store_code(contract_wraplock());
        let wraplock = app
            .instantiate_contract(
                wraplock_code,
                Addr::unchecked(ADMIN),
                &InstantiateMsg { admin: None },
                &[],
                "wraplock",
                Some(ADMIN.to_string()),
            )
            .unwrap();

        Self {
            app,
            wraplock,
            token,
            other_token,
            verifier,
        }
    }

    pub fn init(&mut self) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::Init {
            chain_id: Binary::from(LOCAL_CHAIN.to_vec()),
            bridge_contract: self.verifier.to_string(),
            paired_chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
        };
        self.execute(ADMIN, &msg)
    }

    pub fn execute(&mut self, sender: &str, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.wraplock.clone(),
            msg,
            &[],
        )
    }

    pub fn add_contract(
        &mut self,
        sender: &str,
        native: &str,
        wraptoken: &str,
    ) -> anyhow::Result<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::AddContract {
                native_token_contract: native.to_string(),
                paired_wraptoken_contract: wraptoken.to_string(),
            },
        )
    }

    pub fn del_contract(&mut self, sender: &str, native: &str) -> anyhow::Result<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::DelContract {
                native_token_contract: native.to_string(),
            },
        )
    }

    pub fn disable(&mut self) -> anyhow::Result<AppResponse> {
        self.execute(ADMIN, &ExecuteMsg::Disable {})
    }

    pub fn enable(&mut self) -> anyhow::Result<AppResponse> {
        self.execute(ADMIN, &ExecuteMsg::Enable {})
    }

    /// CW20 `Send` from `from` into WrapLock with a deposit memo.
    pub fn deposit_from(
        &mut self,
        token: &Addr,
        from: &str,
        amount: u128,
        memo: &str,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(from),
            token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.wraplock.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(&ReceiveMsg::Deposit {
                    memo: memo.to_string(),
                })
                .unwrap(),
            },
            &[],
        )
    }

    pub fn deposit(&mut self, from: &str, amount: u128, memo: &str) -> anyhow::Result<AppResponse> {
        let token = self.token.clone();
        self.deposit_from(&token, from, amount, memo)
    }

    pub fn checkpoint(&mut self, root: &[u8]) {
        self.app
            .execute_contract(
                Addr::unchecked(ADMIN),
                self.verifier.clone(),
                &MockVerifierExecuteMsg::Checkpoint {
                    root: Binary::from(root.to_vec()),
                },
                &[],
            )
            .unwrap();
    }

    pub fn withdraw_a(&mut self, actionproof: &ActionProof) -> anyhow::Result<AppResponse> {
        self.execute(
            PROVER,
            &ExecuteMsg::WithdrawA {
                blockproof: heavy_proof(actionproof),
                actionproof: actionproof.clone(),
            },
        )
    }

    pub fn withdraw_b(&mut self, actionproof: &ActionProof) -> anyhow::Result<AppResponse> {
        self.execute(
            PROVER,
            &ExecuteMsg::WithdrawB {
                blockproof: light_proof(actionproof),
                actionproof: actionproof.clone(),
            },
        )
    }

    pub fn cancel_a(&mut self, actionproof: &ActionProof) -> anyhow::Result<AppResponse> {
        self.execute(
            PROVER,
            &ExecuteMsg::CancelA {
                blockproof: heavy_proof(actionproof),
                actionproof: actionproof.clone(),
            },
        )
    }

    pub fn cancel_b(&mut self, actionproof: &ActionProof) -> anyhow::Result<AppResponse> {
        self.execute(
            PROVER,
            &ExecuteMsg::CancelB {
                blockproof: light_proof(actionproof),
                actionproof: actionproof.clone(),
            },
        )
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.wraplock.clone(), msg)
            .unwrap()
    }

    pub fn balance(&self, token: &Addr, owner: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &Cw20QueryMsg::Balance {
                    address: owner.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn reserve(&self) -> u128 {
        let res: ReserveResponse = self.query(&QueryMsg::Reserve {
            token_contract: self.token.to_string(),
            symbol: SYMBOL.to_string(),
        });
        res.balance.u128()
    }

    pub fn is_processed(&self, actionproof: &ActionProof) -> bool {
        let res: IsProcessedResponse = self.query(&QueryMsg::IsProcessed {
            receipt_digest: Binary::from(actionproof.receipt.digest().to_vec()),
        });
        res.processed
    }

    /// The paired-chain transfer of `amount` TOK from Alice to Bob.
    pub fn alice_to_bob(&self, amount: u128) -> TransferMessage {
        transfer(ALICE, BOB, amount, &self.token)
    }
}

// ============================================================================
// Proof Builders
// ============================================================================

pub fn transfer(owner: &str, beneficiary: &str, amount: u128, token: &Addr) -> TransferMessage {
    TransferMessage {
        owner: owner.to_string(),
        quantity: ExtendedAsset::new(amount, DECIMALS, SYMBOL, token.as_str()),
        beneficiary: beneficiary.to_string(),
        memo: beneficiary.to_string(),
    }
}

/// Action proof of `account` emitting `xfer`; `seq` distinguishes receipts.
pub fn action_proof(account: &str, xfer: &TransferMessage, seq: u64) -> ActionProof {
    let action = ProvenAction {
        account: account.to_string(),
        name: EMITXFER_ACTION.to_string(),
        data: Binary::from(xfer.encode()),
    };
    ActionProof {
        receipt: ActionReceipt {
            receiver: account.to_string(),
            act_digest: Binary::from(action.digest().to_vec()),
            global_sequence: seq,
            recv_sequence: seq,
        },
        action,
        amproofpath: vec![],
    }
}

/// Header whose action root commits to exactly this receipt.
pub fn header_for(actionproof: &ActionProof) -> BlockHeader {
    BlockHeader {
        timestamp: 1_700_000_000,
        producer: "producer1".to_string(),
        confirmed: 0,
        previous: Binary::from(vec![0u8; 32]),
        transaction_mroot: Binary::from(vec![0u8; 32]),
        action_mroot: Binary::from(actionproof.receipt.digest().to_vec()),
        schedule_version: 1,
    }
}

pub fn heavy_proof(actionproof: &ActionProof) -> HeavyProof {
    HeavyProof {
        chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
        hashes: vec![],
        blocktoprove: AuthenticatedBlock {
            header: header_for(actionproof),
            producer_signatures: vec![],
            bmproofpath: vec![],
        },
        bftproof: vec![],
    }
}

/// Light proof against `checkpoint_root()`.
pub fn light_proof(actionproof: &ActionProof) -> LightProof {
    LightProof {
        chain_id: Binary::from(PAIRED_CHAIN.to_vec()),
        header: header_for(actionproof),
        root: Binary::from(checkpoint_root().to_vec()),
        bmproofpath: vec![],
    }
}

pub fn checkpoint_root() -> [u8; 32] {
    common::keccak256(b"checkpointed block root")
}

/// Assert an execution failed with an error whose message contains `needle`.
pub fn assert_err_contains(res: anyhow::Result<AppResponse>, needle: &str) {
    let err = res.unwrap_err();
    let err_str = err.root_cause().to_string();
    assert!(
        err_str.contains(needle),
        "expected error containing {:?}, got: {}",
        needle,
        err_str
    );
}
