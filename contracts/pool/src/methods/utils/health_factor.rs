use common::{to_u128, PercentageMath, WadRayMath};
use pool_interface::types::account_data::HealthFactor;
use pool_interface::types::error::Error;

use super::convert::{i128_to_u256, u256_to_i128};

/// Risk-adjusted collateral to debt ratio in ray.
/// A ratio which doesn't fit 128 bits is saturated.
pub fn calc_health_factor_from_balances(
    total_collateral: i128,
    total_debt: i128,
    liquidation_threshold: u32,
) -> Result<HealthFactor, Error> {
    if total_debt == 0 {
        return Ok(HealthFactor::Infinite);
    }

    let total_debt = i128_to_u256(total_debt)?;
    let health_factor = i128_to_u256(total_collateral)?
        .percent_mul(liquidation_threshold)
        .and_then(|collateral| collateral.ray_div(total_debt))
        .ok_or(Error::CalcAccountDataMathError)?;

    Ok(HealthFactor::Value(
        to_u128(health_factor).unwrap_or(u128::MAX),
    ))
}

/// Collateral value allowed by `ltv` not yet taken by debt
pub fn calc_available_borrows(
    total_collateral: i128,
    total_debt: i128,
    ltv: u32,
) -> Result<i128, Error> {
    let available = i128_to_u256(total_collateral)?
        .percent_mul(ltv)
        .ok_or(Error::CalcAccountDataMathError)?;
    let available = u256_to_i128(available)?;

    Ok(available.saturating_sub(total_debt).max(0))
}
