//! Shared cw-multi-test harness for the relay bridge suites.

#![allow(dead_code)]

use common::AssetInfo;
use cosmwasm_std::{coin, Addr, Binary, Empty, Event, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use relay_bridge::msg::{ExecuteMsg, FundsResponse, InstantiateMsg, ListEntry, QueryMsg};

pub const DENOM: &str = "uluna";
/// A bank denom the bridge does not account for
pub const FOREIGN_DENOM: &str = "uusd";
pub const REMOTE_CHAIN: u64 = 1899;
pub const REMOTE_RECIPIENT: &str = "0x00000000000000000000000000000000000000aa";

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        relay_bridge::contract::execute,
        relay_bridge::contract::instantiate,
        relay_bridge::contract::query,
    )
    .with_reply(relay_bridge::contract::reply)
    .with_migrate(relay_bridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub owner: Addr,
    pub admin: Addr,
    pub signer: Addr,
    pub user: Addr,
    pub provider: Addr,
}

/// Bridge instantiated by `owner`, signer assigned, nothing registered.
pub fn setup() -> Suite {
    let owner = Addr::unchecked("terra1owner");
    let admin = Addr::unchecked("terra1admin");
    let signer = Addr::unchecked("terra1signer");
    let user = Addr::unchecked("terra1user");
    let provider = Addr::unchecked("terra1provider");

    let mut app = App::default();
    app.init_modules(|router, _, storage| {
        for account in [&user, &provider] {
            router
                .bank
                .init_balance(
                    storage,
                    account,
                    vec![coin(1_000_000, DENOM), coin(1_000_000, FOREIGN_DENOM)],
                )
                .unwrap();
        }
    });

    let code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                native_denom: DENOM.to_string(),
                required_confirmations: None,
            },
            &[],
            "relay-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        bridge.clone(),
        &ExecuteMsg::SetSigner {
            signer: signer.to_string(),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        bridge,
        owner,
        admin,
        signer,
        user,
        provider,
    }
}

impl Suite {
    /// CW20 token; `owned` makes the bridge its minter.
    pub fn create_token(&mut self, owned: bool, holders: &[(&Addr, u128)]) -> Addr {
        let code_id = self.app.store_code(contract_cw20());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: "Relay Test Token".to_string(),
                    symbol: "RTT".to_string(),
                    decimals: 6,
                    initial_balances: holders
                        .iter()
                        .map(|(address, amount)| Cw20Coin {
                            address: address.to_string(),
                            amount: Uint128::new(*amount),
                        })
                        .collect(),
                    mint: owned.then(|| MinterResponse {
                        minter: self.bridge.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                "token",
                None,
            )
            .unwrap()
    }

    pub fn register(&mut self, tokens: Vec<AssetInfo>) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.bridge.clone(),
                &ExecuteMsg::RegisterTokens { tokens },
                &[],
            )
            .unwrap();
    }

    pub fn approve(&mut self, token: &Addr, holder: &Addr, amount: u128) {
        self.app
            .execute_contract(
                holder.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn add_validators(&mut self, validators: &[&Addr]) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &ExecuteMsg::AddValidators {
                    validators: validators.iter().map(|v| v.to_string()).collect(),
                },
                &[],
            )
            .unwrap();
    }

    pub fn set_required_confirmations(&mut self, count: u64) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &ExecuteMsg::SetRequiredConfirmations { count },
                &[],
            )
            .unwrap();
    }

    /// Fund custody through the ledger from `provider`.
    pub fn fund_cw20(&mut self, token: &Addr, amount: u128) {
        let provider = self.provider.clone();
        self.approve(token, &provider, amount);
        self.app
            .execute_contract(
                provider,
                self.bridge.clone(),
                &ExecuteMsg::AddFunds {
                    token: AssetInfo::cw20(token.as_str()),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    pub fn list(&mut self, entries: Vec<ListEntry>) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.signer.clone(),
            self.bridge.clone(),
            &ExecuteMsg::List { entries },
            &[],
        )
    }

    pub fn confirm(&mut self, validator: &Addr, hashes: Vec<Binary>) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            validator.clone(),
            self.bridge.clone(),
            &ExecuteMsg::Confirm { hashes },
            &[],
        )
    }

    pub fn transfer(&mut self, hashes: Vec<Binary>) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.signer.clone(),
            self.bridge.clone(),
            &ExecuteMsg::Transfer { hashes },
            &[],
        )
    }

    pub fn cw20_balance(&self, token: &Addr, holder: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: holder.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn native_balance(&self, holder: &Addr) -> u128 {
        self.bank_balance(holder, DENOM)
    }

    pub fn bank_balance(&self, holder: &Addr, denom: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(holder, denom)
            .unwrap()
            .amount
            .u128()
    }

    /// Amount recorded in the funds ledger for `provider`
    pub fn recorded_funds(&self, token: AssetInfo) -> u128 {
        let funds: FundsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::Funds {
                    depositor: self.provider.to_string(),
                    token,
                },
            )
            .unwrap();
        funds.amount.u128()
    }
}

pub fn tx_hash(seed: u8) -> Binary {
    Binary::from(relay_bridge::keccak256(&[seed]).to_vec())
}

pub fn list_entry(token: AssetInfo, recipient: &Addr, amount: u128, seed: u8) -> ListEntry {
    ListEntry {
        token,
        recipient: recipient.to_string(),
        amount: Uint128::new(amount),
        source_chain_id: REMOTE_CHAIN,
        tx_hash: tx_hash(seed),
    }
}

/// Custom events emitted by the bridge, matched on their `wasm-` type
pub fn wasm_events<'a>(res: &'a AppResponse, ty: &str) -> Vec<&'a Event> {
    let ty = format!("wasm-{ty}");
    res.events.iter().filter(|e| e.ty == ty).collect()
}

pub fn attr<'a>(event: &'a Event, key: &str) -> &'a str {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_str())
        .unwrap()
}

pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
