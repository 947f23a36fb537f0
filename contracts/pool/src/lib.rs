#![deny(warnings)]
#![no_std]

use methods::{
    account_data::account_data,
    balance_decrease_allowed::balance_decrease_allowed,
    cumulate_to_liquidity_index::cumulate_to_liquidity_index,
    init_reserve::init_reserve,
    initialize::initialize,
    normalized_debt::normalized_debt,
    normalized_income::normalized_income,
    set_as_collateral::set_as_collateral,
    set_borrowing::set_borrowing,
    set_price_feed::set_price_feed,
    stable_debt::{
        stable_debt_balance, stable_debt_supply_data, stable_debt_total_supply, stable_debt_user,
    },
    stable_debt_burn::stable_debt_burn,
    stable_debt_mint::stable_debt_mint,
    update_interest_rates::update_interest_rates,
    update_state::update_state,
};
use pool_interface::types::{
    account_data::UserAccountData,
    error::Error,
    init_reserve_input::InitReserveInput,
    reserve_data::ReserveData,
    stable_debt::{StableDebtBurnResult, StableDebtMintResult, StableDebtSupplyData, UserStableDebt},
    user_config::UserConfiguration,
};
use pool_interface::LendingPoolTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn initialize(env: Env, admin: Address, price_feed: Address) -> Result<(), Error> {
        initialize(&env, &admin, &price_feed)
    }

    fn set_price_feed(env: Env, price_feed: Address) -> Result<(), Error> {
        set_price_feed(&env, &price_feed)
    }

    fn price_feed(env: Env) -> Result<Address, Error> {
        read_price_feed(&env)
    }

    fn init_reserve(env: Env, asset: Address, input: InitReserveInput) -> Result<(), Error> {
        init_reserve(&env, &asset, &input)
    }

    fn get_reserve(env: Env, asset: Address) -> Option<ReserveData> {
        read_reserve(&env, &asset).ok()
    }

    fn get_reserves(env: Env) -> Vec<Address> {
        read_reserves(&env)
    }

    fn update_state(env: Env, asset: Address) -> Result<ReserveData, Error> {
        update_state(&env, &asset)
    }

    fn update_interest_rates(
        env: Env,
        asset: Address,
        liquidity_added: i128,
        liquidity_taken: i128,
    ) -> Result<ReserveData, Error> {
        update_interest_rates(&env, &asset, liquidity_added, liquidity_taken)
    }

    fn cumulate_to_liquidity_index(
        env: Env,
        asset: Address,
        total_liquidity: i128,
        amount: i128,
    ) -> Result<u128, Error> {
        cumulate_to_liquidity_index(&env, &asset, total_liquidity, amount)
    }

    fn normalized_income(env: Env, asset: Address) -> Result<u128, Error> {
        normalized_income(&env, &asset)
    }

    fn normalized_debt(env: Env, asset: Address) -> Result<u128, Error> {
        normalized_debt(&env, &asset)
    }

    fn stable_debt_mint(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
        rate: u128,
    ) -> Result<StableDebtMintResult, Error> {
        stable_debt_mint(&env, &asset, &who, amount, rate)
    }

    fn stable_debt_burn(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
    ) -> Result<StableDebtBurnResult, Error> {
        stable_debt_burn(&env, &asset, &who, amount)
    }

    fn stable_debt_balance(env: Env, asset: Address, who: Address) -> Result<i128, Error> {
        stable_debt_balance(&env, &asset, &who)
    }

    fn stable_debt_user(env: Env, asset: Address, who: Address) -> UserStableDebt {
        stable_debt_user(&env, &asset, &who)
    }

    fn stable_debt_total_supply(env: Env, asset: Address) -> Result<i128, Error> {
        stable_debt_total_supply(&env, &asset)
    }

    fn stable_debt_supply_data(env: Env, asset: Address) -> Result<StableDebtSupplyData, Error> {
        stable_debt_supply_data(&env, &asset)
    }

    fn set_as_collateral(
        env: Env,
        who: Address,
        asset: Address,
        use_as_collateral: bool,
    ) -> Result<(), Error> {
        set_as_collateral(&env, &who, &asset, use_as_collateral)
    }

    fn set_borrowing(
        env: Env,
        who: Address,
        asset: Address,
        borrowing: bool,
    ) -> Result<(), Error> {
        set_borrowing(&env, &who, &asset, borrowing)
    }

    fn user_configuration(env: Env, who: Address) -> Result<UserConfiguration, Error> {
        read_user_config(&env, &who)
    }

    fn account_data(env: Env, who: Address) -> Result<UserAccountData, Error> {
        account_data(&env, &who)
    }

    fn balance_decrease_allowed(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        balance_decrease_allowed(&env, &asset, &who, amount)
    }
}
