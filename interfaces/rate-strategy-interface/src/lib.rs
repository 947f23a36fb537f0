#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::interest_rates::InterestRates;

pub mod types;

pub struct Spec;

/// Interest rate curve of a reserve
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "RateStrategyClient")]
pub trait RateStrategyTrait {
    /// Calculates reserve rates from utilization after the operation.
    ///
    /// # Arguments
    ///
    /// - asset - The reserve underlying asset.
    /// - liquidity_added - The liquidity brought in by the operation.
    /// - liquidity_taken - The liquidity taken out by the operation.
    /// - total_stable_debt - The stable debt including accrued interest.
    /// - total_variable_debt - The variable debt including accrued interest.
    /// - avg_stable_rate - The weighted average stable rate, ray.
    /// - reserve_factor - The part of interest going to treasury, 100% - 10_000.
    fn calculate_interest_rates(
        env: Env,
        asset: Address,
        liquidity_added: i128,
        liquidity_taken: i128,
        total_stable_debt: i128,
        total_variable_debt: i128,
        avg_stable_rate: u128,
        reserve_factor: u32,
    ) -> InterestRates;
}
