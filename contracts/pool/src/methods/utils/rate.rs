use common::{compounded_interest, linear_interest, PercentageMath, WadRayMath, U256};
use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use pool_interface::types::stable_debt::StableDebtSupply;

use super::convert::{i128_to_u256, u256_to_i128, u256_to_index};
use super::get_elapsed_time::get_elapsed_time;
use super::stable_debt::calc_total_supply;

/// Reserve state advanced to the current time and the amount owed to the treasury
#[derive(Debug, Clone)]
pub struct UpdatedState {
    pub reserve: ReserveData,
    pub treasury_amount: i128,
}

/// Liquidity index projected to `current_time`, ray
pub fn calc_normalized_income(reserve: &ReserveData, current_time: u64) -> Result<u128, Error> {
    let elapsed_time = get_elapsed_time(reserve.last_update_timestamp, current_time)?;

    if elapsed_time == 0 {
        return Ok(reserve.liquidity_index);
    }

    let income = linear_interest(U256::from(reserve.current_liquidity_rate), elapsed_time)
        .and_then(|interest| interest.ray_mul(U256::from(reserve.liquidity_index)))
        .ok_or(Error::ArithmeticOverflow)?;

    u256_to_index(income)
}

/// Variable borrow index projected to `current_time`, ray
pub fn calc_normalized_debt(reserve: &ReserveData, current_time: u64) -> Result<u128, Error> {
    let elapsed_time = get_elapsed_time(reserve.last_update_timestamp, current_time)?;

    if elapsed_time == 0 {
        return Ok(reserve.variable_borrow_index);
    }

    let debt = compounded_interest(
        U256::from(reserve.current_variable_borrow_rate),
        elapsed_time,
    )
    .and_then(|interest| interest.ray_mul(U256::from(reserve.variable_borrow_index)))
    .ok_or(Error::ArithmeticOverflow)?;

    u256_to_index(debt)
}

/// Advances reserve indexes to `current_time`.
///
/// The liquidity index grows only while the liquidity rate is positive, the variable
/// borrow index additionally requires outstanding variable debt. A share of the debt
/// interest accrued since the last update, defined by the reserve factor, is owed to
/// the treasury.
pub fn calc_updated_state(
    reserve: &ReserveData,
    scaled_variable_debt: i128,
    stable_supply: &StableDebtSupply,
    current_time: u64,
) -> Result<UpdatedState, Error> {
    let elapsed_time = get_elapsed_time(reserve.last_update_timestamp, current_time)?;

    if elapsed_time == 0 {
        return Ok(UpdatedState {
            reserve: reserve.clone(),
            treasury_amount: 0,
        });
    }

    let scaled_variable_debt = i128_to_u256(scaled_variable_debt)?;
    let prev_liquidity_index = U256::from(reserve.liquidity_index);
    let prev_variable_borrow_index = U256::from(reserve.variable_borrow_index);

    let mut liquidity_index = prev_liquidity_index;
    let mut variable_borrow_index = prev_variable_borrow_index;

    if reserve.current_liquidity_rate > 0 {
        liquidity_index = linear_interest(U256::from(reserve.current_liquidity_rate), elapsed_time)
            .and_then(|interest| interest.ray_mul(prev_liquidity_index))
            .ok_or(Error::ArithmeticOverflow)?;

        if !scaled_variable_debt.is_zero() {
            variable_borrow_index = compounded_interest(
                U256::from(reserve.current_variable_borrow_rate),
                elapsed_time,
            )
            .and_then(|interest| interest.ray_mul(prev_variable_borrow_index))
            .ok_or(Error::ArithmeticOverflow)?;
        }
    }

    let mut updated = reserve.clone();
    updated.liquidity_index = u256_to_index(liquidity_index)?;
    updated.variable_borrow_index = u256_to_index(variable_borrow_index)?;
    updated.last_update_timestamp = current_time;

    let treasury_amount = calc_treasury_amount(
        reserve,
        scaled_variable_debt,
        prev_variable_borrow_index,
        variable_borrow_index,
        stable_supply,
        current_time,
    )?;

    Ok(UpdatedState {
        reserve: updated,
        treasury_amount,
    })
}

fn calc_treasury_amount(
    reserve: &ReserveData,
    scaled_variable_debt: U256,
    prev_variable_borrow_index: U256,
    variable_borrow_index: U256,
    stable_supply: &StableDebtSupply,
    current_time: u64,
) -> Result<i128, Error> {
    let reserve_factor = reserve.configuration.reserve_factor;

    if reserve_factor == 0 {
        return Ok(0);
    }

    let prev_variable_debt = scaled_variable_debt
        .ray_mul(prev_variable_borrow_index)
        .ok_or(Error::ArithmeticOverflow)?;
    let curr_variable_debt = scaled_variable_debt
        .ray_mul(variable_borrow_index)
        .ok_or(Error::ArithmeticOverflow)?;

    // stable debt as it stood at the previous reserve update
    let stable_elapsed_time = reserve
        .last_update_timestamp
        .saturating_sub(stable_supply.timestamp);
    let stable_principal = i128_to_u256(stable_supply.principal)?;
    let prev_stable_debt =
        compounded_interest(U256::from(stable_supply.avg_rate), stable_elapsed_time)
            .and_then(|interest| stable_principal.ray_mul(interest))
            .ok_or(Error::ArithmeticOverflow)?;
    let curr_stable_debt = i128_to_u256(calc_total_supply(stable_supply, current_time)?)?;

    let total_debt_accrued = curr_variable_debt
        .checked_add(curr_stable_debt)
        .and_then(|debt| debt.checked_sub(prev_variable_debt))
        .and_then(|debt| debt.checked_sub(prev_stable_debt))
        .ok_or(Error::ArithmeticOverflow)?;

    let amount = total_debt_accrued
        .percent_mul(reserve_factor)
        .ok_or(Error::ArithmeticOverflow)?;

    u256_to_i128(amount)
}
