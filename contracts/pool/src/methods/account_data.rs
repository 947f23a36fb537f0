use common::{WadRayMath, U256};
use debt_token_interface::DebtTokenClient;
use pool_interface::types::account_data::UserAccountData;
use pool_interface::types::error::Error;
use pool_interface::types::user_config::UserConfiguration;
use s_token_interface::STokenClient;
use soroban_sdk::{Address, Env};

use crate::storage::{read_reserve, read_reserves, read_user_config, read_user_stable_debt};
use crate::types::price_provider::PriceProvider;

use super::utils::convert::{i128_to_u256, u256_to_i128};
use super::utils::health_factor::{calc_available_borrows, calc_health_factor_from_balances};
use super::utils::rate::{calc_normalized_debt, calc_normalized_income};
use super::utils::stable_debt::calc_balance;

pub fn account_data(env: &Env, who: &Address) -> Result<UserAccountData, Error> {
    let user_config = read_user_config(env, who).unwrap_or_default();

    if user_config.is_empty() {
        return Ok(UserAccountData::empty());
    }

    calc_account_data(env, who, &user_config, &mut PriceProvider::new(env)?)
}

/// Aggregates collateral and debt of `who` over every flagged reserve.
/// Values are expressed in the price feed unit of account.
pub fn calc_account_data(
    env: &Env,
    who: &Address,
    user_config: &UserConfiguration,
    price_provider: &mut PriceProvider,
) -> Result<UserAccountData, Error> {
    if user_config.is_empty() {
        return Ok(UserAccountData::empty());
    }

    let current_time = env.ledger().timestamp();
    let reserves = read_reserves(env);
    let reserves_len =
        u8::try_from(reserves.len()).map_err(|_| Error::ReservesMaxCapacityExceeded)?;

    let mut total_collateral: i128 = 0;
    let mut total_debt: i128 = 0;
    let mut weighted_ltv: i128 = 0;
    let mut weighted_liquidation_threshold: i128 = 0;

    for i in 0..reserves_len {
        if !user_config.is_using_as_collateral_or_borrowing(env, i) {
            continue;
        }

        let asset = reserves.get_unchecked(i.into());
        let reserve = read_reserve(env, &asset)?;
        let config = &reserve.configuration;

        if config.liquidation_threshold != 0 && user_config.is_using_as_collateral(env, i) {
            let scaled_balance =
                STokenClient::new(env, &reserve.s_token_address).scaled_balance_of(who);
            let liquidity_index = calc_normalized_income(&reserve, current_time)?;
            let balance = scale(scaled_balance, liquidity_index)?;

            let value = price_provider.convert(&asset, config.decimals, balance)?;

            total_collateral = total_collateral
                .checked_add(value)
                .ok_or(Error::CalcAccountDataMathError)?;
            weighted_ltv = value
                .checked_mul(config.ltv.into())
                .and_then(|v| weighted_ltv.checked_add(v))
                .ok_or(Error::CalcAccountDataMathError)?;
            weighted_liquidation_threshold = value
                .checked_mul(config.liquidation_threshold.into())
                .and_then(|v| weighted_liquidation_threshold.checked_add(v))
                .ok_or(Error::CalcAccountDataMathError)?;
        }

        if user_config.is_borrowing(env, i) {
            let stable_debt = calc_balance(
                &read_user_stable_debt(env, &asset, who),
                current_time,
            )?;

            let scaled_variable_debt =
                DebtTokenClient::new(env, &reserve.debt_token_address).scaled_balance_of(who);
            let variable_borrow_index = calc_normalized_debt(&reserve, current_time)?;
            let variable_debt = scale(scaled_variable_debt, variable_borrow_index)?;

            let debt = stable_debt
                .checked_add(variable_debt)
                .ok_or(Error::CalcAccountDataMathError)?;
            let value = price_provider.convert(&asset, config.decimals, debt)?;

            total_debt = total_debt
                .checked_add(value)
                .ok_or(Error::CalcAccountDataMathError)?;
        }
    }

    let avg_ltv = weighted_average(weighted_ltv, total_collateral)?;
    let avg_liquidation_threshold =
        weighted_average(weighted_liquidation_threshold, total_collateral)?;

    Ok(UserAccountData {
        total_collateral,
        total_debt,
        available_borrows: calc_available_borrows(total_collateral, total_debt, avg_ltv)?,
        avg_ltv,
        avg_liquidation_threshold,
        health_factor: calc_health_factor_from_balances(
            total_collateral,
            total_debt,
            avg_liquidation_threshold,
        )?,
    })
}

/// Scaled balance multiplied by the ray index
fn scale(scaled_balance: i128, index: u128) -> Result<i128, Error> {
    let balance = i128_to_u256(scaled_balance)?
        .ray_mul(U256::from(index))
        .ok_or(Error::CalcAccountDataMathError)?;

    u256_to_i128(balance)
}

fn weighted_average(weighted_sum: i128, total: i128) -> Result<u32, Error> {
    if total == 0 {
        return Ok(0);
    }

    weighted_sum
        .checked_div(total)
        .and_then(|avg| u32::try_from(avg).ok())
        .ok_or(Error::CalcAccountDataMathError)
}
