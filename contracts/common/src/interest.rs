use crate::{ray, WadRayMath, SECONDS_PER_YEAR, U256};

/// Interest accumulated linearly over `elapsed_time` seconds at annual ray `rate`.
///
/// Result is a ray factor `1 + rate * elapsed_time / SECONDS_PER_YEAR`.
pub fn linear_interest(rate: U256, elapsed_time: u64) -> Option<U256> {
    rate.checked_mul(U256::from(elapsed_time))?
        .checked_div(U256::from(SECONDS_PER_YEAR))?
        .checked_add(ray())
}

/// Interest compounded every second over `elapsed_time` seconds at annual ray `rate`.
///
/// `(1 + rate / SECONDS_PER_YEAR) ^ elapsed_time` is approximated with the
/// binomial expansion truncated after the third term:
///
/// `1 + n*r + n*(n-1)*r^2/2 + n*(n-1)*(n-2)*r^3/6`
///
/// where `r` is the per second rate and `n` is `elapsed_time`. The result
/// slightly underestimates the exact compounding which favors borrowers.
pub fn compounded_interest(rate: U256, elapsed_time: u64) -> Option<U256> {
    if elapsed_time == 0 {
        return Some(ray());
    }

    let exp = U256::from(elapsed_time);
    let exp_minus_one = U256::from(elapsed_time - 1);
    let exp_minus_two = U256::from(elapsed_time.saturating_sub(2));

    let rate_per_second = rate.checked_div(U256::from(SECONDS_PER_YEAR))?;

    let base_power_two = rate_per_second.ray_mul(rate_per_second)?;
    let base_power_three = base_power_two.ray_mul(rate_per_second)?;

    let second_term = exp
        .checked_mul(exp_minus_one)?
        .checked_mul(base_power_two)?
        .checked_div(U256::from(2u8))?;
    let third_term = exp
        .checked_mul(exp_minus_one)?
        .checked_mul(exp_minus_two)?
        .checked_mul(base_power_three)?
        .checked_div(U256::from(6u8))?;

    ray()
        .checked_add(rate_per_second.checked_mul(exp)?)?
        .checked_add(second_term)?
        .checked_add(third_term)
}
