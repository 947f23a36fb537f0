#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::account_data::UserAccountData;
use types::error::Error;
use types::init_reserve_input::InitReserveInput;
use types::reserve_data::ReserveData;
use types::stable_debt::{
    StableDebtBurnResult, StableDebtMintResult, StableDebtSupplyData, UserStableDebt,
};
use types::user_config::UserConfiguration;

pub mod types;

pub struct Spec;

/// Interface for the lending pool accrual core
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    fn initialize(env: Env, admin: Address, price_feed: Address) -> Result<(), Error>;

    fn set_price_feed(env: Env, price_feed: Address) -> Result<(), Error>;

    fn price_feed(env: Env) -> Result<Address, Error>;

    fn init_reserve(env: Env, asset: Address, input: InitReserveInput) -> Result<(), Error>;

    fn get_reserve(env: Env, asset: Address) -> Option<ReserveData>;

    fn get_reserves(env: Env) -> Vec<Address>;

    /// Accrues interest of the reserve up to the current ledger timestamp.
    /// Calling it twice within the same timestamp is a no-op.
    fn update_state(env: Env, asset: Address) -> Result<ReserveData, Error>;

    /// Recomputes the reserve rates through its rate strategy
    ///
    /// # Arguments
    ///
    /// - asset - The reserve underlying asset.
    /// - liquidity_added - The liquidity brought in by the current operation.
    /// - liquidity_taken - The liquidity taken out by the current operation.
    ///
    /// # Errors
    ///
    /// - RateOverflow if any rate returned by the strategy exceeds 128 bits.
    fn update_interest_rates(
        env: Env,
        asset: Address,
        liquidity_added: i128,
        liquidity_taken: i128,
    ) -> Result<ReserveData, Error>;

    /// Distributes `amount` to the depositors of the reserve in a single step.
    /// Returns the new liquidity index.
    fn cumulate_to_liquidity_index(
        env: Env,
        asset: Address,
        total_liquidity: i128,
        amount: i128,
    ) -> Result<u128, Error>;

    fn normalized_income(env: Env, asset: Address) -> Result<u128, Error>;

    fn normalized_debt(env: Env, asset: Address) -> Result<u128, Error>;

    fn stable_debt_mint(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
        rate: u128,
    ) -> Result<StableDebtMintResult, Error>;

    fn stable_debt_burn(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
    ) -> Result<StableDebtBurnResult, Error>;

    fn stable_debt_balance(env: Env, asset: Address, who: Address) -> Result<i128, Error>;

    fn stable_debt_user(env: Env, asset: Address, who: Address) -> UserStableDebt;

    fn stable_debt_total_supply(env: Env, asset: Address) -> Result<i128, Error>;

    fn stable_debt_supply_data(env: Env, asset: Address) -> Result<StableDebtSupplyData, Error>;

    fn set_as_collateral(
        env: Env,
        who: Address,
        asset: Address,
        use_as_collateral: bool,
    ) -> Result<(), Error>;

    fn set_borrowing(env: Env, who: Address, asset: Address, borrowing: bool)
        -> Result<(), Error>;

    fn user_configuration(env: Env, who: Address) -> Result<UserConfiguration, Error>;

    fn account_data(env: Env, who: Address) -> Result<UserAccountData, Error>;

    /// Checks whether the user may withdraw `amount` of collateral `asset`
    /// without the health factor dropping below one.
    fn balance_decrease_allowed(
        env: Env,
        asset: Address,
        who: Address,
        amount: i128,
    ) -> Result<bool, Error>;
}
