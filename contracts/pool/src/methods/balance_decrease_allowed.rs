use common::RAY;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{read_reserve, read_user_config};
use crate::types::price_provider::PriceProvider;

use super::account_data::calc_account_data;
use super::utils::health_factor::calc_health_factor_from_balances;
use super::utils::validation::require_non_negative_amount;

pub fn balance_decrease_allowed(
    env: &Env,
    asset: &Address,
    who: &Address,
    amount: i128,
) -> Result<bool, Error> {
    require_non_negative_amount(amount)?;

    let reserve = read_reserve(env, asset)?;
    let user_config = read_user_config(env, who).unwrap_or_default();
    let reserve_id = reserve.get_id()?;

    if !user_config.is_borrowing_any() || !user_config.is_using_as_collateral(env, reserve_id) {
        return Ok(true);
    }

    let liquidation_threshold = reserve.configuration.liquidation_threshold;

    if liquidation_threshold == 0 {
        return Ok(true);
    }

    let mut price_provider = PriceProvider::new(env)?;
    let account_data = calc_account_data(env, who, &user_config, &mut price_provider)?;

    if account_data.total_debt == 0 {
        return Ok(true);
    }

    let decrease = price_provider.convert(asset, reserve.configuration.decimals, amount)?;

    if decrease > account_data.total_collateral {
        return Err(Error::InvalidAmount);
    }

    let collateral_after = account_data.total_collateral - decrease;

    if collateral_after == 0 {
        return Ok(false);
    }

    let liquidation_threshold_after = account_data
        .total_collateral
        .checked_mul(account_data.avg_liquidation_threshold.into())
        .zip(decrease.checked_mul(liquidation_threshold.into()))
        .and_then(|(total, decreased)| total.checked_sub(decreased))
        .and_then(|remaining| remaining.checked_div(collateral_after))
        .ok_or(Error::CalcAccountDataMathError)?;
    let liquidation_threshold_after =
        u32::try_from(liquidation_threshold_after.max(0)).map_err(|_| Error::CalcAccountDataMathError)?;

    let health_factor = calc_health_factor_from_balances(
        collateral_after,
        account_data.total_debt,
        liquidation_threshold_after,
    )?;

    Ok(health_factor.as_ray() >= RAY)
}
