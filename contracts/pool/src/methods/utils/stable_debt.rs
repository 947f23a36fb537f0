use common::{compounded_interest, WadRayMath, U256};
use pool_interface::types::error::Error;
use pool_interface::types::stable_debt::{StableDebtSupply, UserStableDebt};

use super::convert::{i128_to_u256, u256_to_i128, u256_to_rate};
use super::get_elapsed_time::get_elapsed_time;

#[derive(Debug, Clone)]
pub struct StableDebtMint {
    pub user: UserStableDebt,
    pub supply: StableDebtSupply,
    pub is_first_borrow: bool,
    pub balance_increase: i128,
}

#[derive(Debug, Clone)]
pub struct StableDebtBurn {
    pub user: UserStableDebt,
    pub supply: StableDebtSupply,
    pub balance_increase: i128,
    /// Average rate term of the burned amount exceeded the pool term, supply was flushed to zero
    pub accumulation_underflow: bool,
}

/// User principal compounded at the user rate up to `current_time`
pub fn calc_balance(user: &UserStableDebt, current_time: u64) -> Result<i128, Error> {
    compound(user.principal, user.rate, user.timestamp, current_time)
}

/// Pool principal compounded at the average rate up to `current_time`
pub fn calc_total_supply(supply: &StableDebtSupply, current_time: u64) -> Result<i128, Error> {
    compound(supply.principal, supply.avg_rate, supply.timestamp, current_time)
}

pub fn calc_mint(
    user: &UserStableDebt,
    supply: &StableDebtSupply,
    amount: i128,
    rate: u128,
    current_time: u64,
) -> Result<StableDebtMint, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let (current_balance, balance_increase) = calc_balance_increase(user, current_time)?;
    let prev_supply = calc_total_supply(supply, current_time)?;
    let next_supply = prev_supply
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let next_balance = current_balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    let user_rate = weighted_rate(
        U256::from(user.rate),
        i128_to_u256(current_balance)?,
        U256::from(rate),
        i128_to_u256(amount)?,
        i128_to_u256(next_balance)?,
    )
    .ok_or(Error::ArithmeticOverflow)?;

    let avg_rate = weighted_rate(
        U256::from(supply.avg_rate),
        i128_to_u256(prev_supply)?,
        U256::from(rate),
        i128_to_u256(amount)?,
        i128_to_u256(next_supply)?,
    )
    .ok_or(Error::ArithmeticOverflow)?;

    Ok(StableDebtMint {
        user: UserStableDebt {
            principal: next_balance,
            rate: u256_to_rate(user_rate)?,
            timestamp: current_time,
        },
        supply: StableDebtSupply {
            principal: next_supply,
            avg_rate: u256_to_rate(avg_rate)?,
            timestamp: current_time,
        },
        is_first_borrow: current_balance == 0,
        balance_increase,
    })
}

pub fn calc_burn(
    user: &UserStableDebt,
    supply: &StableDebtSupply,
    amount: i128,
    current_time: u64,
) -> Result<StableDebtBurn, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let (current_balance, balance_increase) = calc_balance_increase(user, current_time)?;

    if amount > current_balance {
        return Err(Error::BurnExceedsBalance);
    }

    let prev_supply = calc_total_supply(supply, current_time)?;
    let mut accumulation_underflow = false;

    let (next_supply, avg_rate) = if prev_supply <= amount {
        (0, 0)
    } else {
        let next_supply = prev_supply - amount;

        let first_term = U256::from(supply.avg_rate)
            .ray_mul(
                i128_to_u256(prev_supply)?
                    .wad_to_ray()
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)?;
        let second_term = U256::from(user.rate)
            .ray_mul(
                i128_to_u256(amount)?
                    .wad_to_ray()
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)?;

        if second_term >= first_term {
            accumulation_underflow = true;
            (0, 0)
        } else {
            let avg_rate = (first_term - second_term)
                .ray_div(
                    i128_to_u256(next_supply)?
                        .wad_to_ray()
                        .ok_or(Error::ArithmeticOverflow)?,
                )
                .ok_or(Error::ArithmeticOverflow)?;

            (next_supply, u256_to_rate(avg_rate)?)
        }
    };

    let user = if amount == current_balance {
        UserStableDebt::default()
    } else {
        UserStableDebt {
            principal: current_balance - amount,
            rate: user.rate,
            timestamp: current_time,
        }
    };

    Ok(StableDebtBurn {
        user,
        supply: StableDebtSupply {
            principal: next_supply,
            avg_rate,
            timestamp: current_time,
        },
        balance_increase,
        accumulation_underflow,
    })
}

/// Returns (current balance, interest accrued since the last user update)
fn calc_balance_increase(user: &UserStableDebt, current_time: u64) -> Result<(i128, i128), Error> {
    if user.principal == 0 {
        return Ok((0, 0));
    }

    let current_balance = calc_balance(user, current_time)?;
    let balance_increase = current_balance
        .checked_sub(user.principal)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok((current_balance, balance_increase))
}

fn compound(principal: i128, rate: u128, timestamp: u64, current_time: u64) -> Result<i128, Error> {
    if principal == 0 {
        return Ok(0);
    }

    let principal = i128_to_u256(principal)?;
    let elapsed_time = get_elapsed_time(timestamp, current_time)?;
    let balance = compounded_interest(U256::from(rate), elapsed_time)
        .and_then(|interest| principal.ray_mul(interest))
        .ok_or(Error::ArithmeticOverflow)?;

    u256_to_i128(balance)
}

/// `(rate_a * amount_a + rate_b * amount_b) / total` with amounts lifted to ray
fn weighted_rate(
    rate_a: U256,
    amount_a: U256,
    rate_b: U256,
    amount_b: U256,
    total: U256,
) -> Option<U256> {
    let term_a = rate_a.ray_mul(amount_a.wad_to_ray()?)?;
    let term_b = amount_b.wad_to_ray()?.ray_mul(rate_b)?;

    term_a.checked_add(term_b)?.ray_div(total.wad_to_ray()?)
}
