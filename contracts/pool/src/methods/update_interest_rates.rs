use common::{WadRayMath, U256};
use debt_token_interface::DebtTokenClient;
use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use rate_strategy_interface::RateStrategyClient;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, read_stable_debt_supply, write_reserve};

use super::utils::convert::{i128_to_u256, u256_to_i128};
use super::utils::stable_debt::calc_total_supply;
use super::utils::validation::{require_admin, require_non_negative_amount};

pub fn update_interest_rates(
    env: &Env,
    asset: &Address,
    liquidity_added: i128,
    liquidity_taken: i128,
) -> Result<ReserveData, Error> {
    require_admin(env)?;
    require_non_negative_amount(liquidity_added)?;
    require_non_negative_amount(liquidity_taken)?;

    let mut reserve = read_reserve(env, asset)?;
    let stable_supply = read_stable_debt_supply(env, asset);
    let total_stable_debt = calc_total_supply(&stable_supply, env.ledger().timestamp())?;

    let scaled_variable_debt =
        DebtTokenClient::new(env, &reserve.debt_token_address).scaled_total_supply();
    let total_variable_debt = i128_to_u256(scaled_variable_debt)?
        .ray_mul(U256::from(reserve.variable_borrow_index))
        .ok_or(Error::ArithmeticOverflow)?;
    let total_variable_debt = u256_to_i128(total_variable_debt)?;

    let rates = RateStrategyClient::new(env, &reserve.rate_strategy_address)
        .calculate_interest_rates(
            asset,
            &liquidity_added,
            &liquidity_taken,
            &total_stable_debt,
            &total_variable_debt,
            &stable_supply.avg_rate,
            &reserve.configuration.reserve_factor,
        );

    reserve.current_liquidity_rate = rates.liquidity_rate.to_u128().ok_or(Error::RateOverflow)?;
    reserve.current_stable_borrow_rate = rates
        .stable_borrow_rate
        .to_u128()
        .ok_or(Error::RateOverflow)?;
    reserve.current_variable_borrow_rate = rates
        .variable_borrow_rate
        .to_u128()
        .ok_or(Error::RateOverflow)?;

    write_reserve(env, asset, &reserve);

    event::reserve_data_updated(env, asset, &reserve);

    Ok(reserve)
}
