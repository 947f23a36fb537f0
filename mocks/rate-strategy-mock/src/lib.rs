#![deny(warnings)]
#![no_std]

mod storage;
#[cfg(test)]
mod test;

use rate_strategy_interface::types::interest_rates::InterestRates;
use rate_strategy_interface::RateStrategyTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, U256};

use crate::storage::*;

pub use crate::storage::RatesInput;

#[contract]
pub struct RateStrategyMock;

#[contractimpl]
impl RateStrategyTrait for RateStrategyMock {
    fn calculate_interest_rates(
        env: Env,
        asset: Address,
        liquidity_added: i128,
        liquidity_taken: i128,
        total_stable_debt: i128,
        total_variable_debt: i128,
        avg_stable_rate: u128,
        reserve_factor: u32,
    ) -> InterestRates {
        write_last_input(
            &env,
            &RatesInput {
                asset,
                liquidity_added,
                liquidity_taken,
                total_stable_debt,
                total_variable_debt,
                avg_stable_rate,
                reserve_factor,
            },
        );

        read_rates(&env).unwrap_or(InterestRates {
            liquidity_rate: U256::from_u32(&env, 0),
            stable_borrow_rate: U256::from_u32(&env, 0),
            variable_borrow_rate: U256::from_u32(&env, 0),
        })
    }
}

#[contractimpl]
impl RateStrategyMock {
    pub fn set_rates(
        env: Env,
        liquidity_rate: U256,
        stable_borrow_rate: U256,
        variable_borrow_rate: U256,
    ) {
        write_rates(
            &env,
            &InterestRates {
                liquidity_rate,
                stable_borrow_rate,
                variable_borrow_rate,
            },
        );
    }

    pub fn last_input(env: Env) -> Option<RatesInput> {
        read_last_input(&env)
    }
}
