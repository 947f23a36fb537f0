use common::{ray, WadRayMath};
use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::convert::{i128_to_u256, u256_to_index};
use super::utils::validation::{require_admin, require_non_negative_amount};

/// Grows the liquidity index so that `total_liquidity` receives `amount` on top
pub fn cumulate_to_liquidity_index(
    env: &Env,
    asset: &Address,
    total_liquidity: i128,
    amount: i128,
) -> Result<u128, Error> {
    require_admin(env)?;
    require_non_negative_amount(amount)?;

    if total_liquidity <= 0 {
        return Err(Error::InvalidAmount);
    }

    let mut reserve = read_reserve(env, asset)?;

    let amount = i128_to_u256(amount)?
        .wad_to_ray()
        .ok_or(Error::ArithmeticOverflow)?;
    let total_liquidity = i128_to_u256(total_liquidity)?
        .wad_to_ray()
        .ok_or(Error::ArithmeticOverflow)?;

    let cumulated = amount
        .ray_div(total_liquidity)
        .and_then(|ratio| ratio.checked_add(ray()))
        .ok_or(Error::ArithmeticOverflow)?;
    // an index out of the 256-bit range is out of the stored range as well
    let liquidity_index = cumulated
        .ray_mul(reserve.liquidity_index.into())
        .ok_or(Error::IndexOverflow)?;

    reserve.liquidity_index = u256_to_index(liquidity_index)?;

    write_reserve(env, asset, &reserve);

    event::reserve_data_updated(env, asset, &reserve);

    Ok(reserve.liquidity_index)
}
