use common::PERCENTAGE_FACTOR;
use pool_interface::types::error::Error;
use pool_interface::types::reserve_configuration::ReserveConfiguration;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, has_reserve, read_admin};

/// 10^38 is the largest power of ten representable by i128
pub const MAX_DECIMALS: u32 = 38;

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_uninitialized_reserve(env: &Env, asset: &Address) {
    assert_with_error!(
        env,
        !has_reserve(env, asset),
        Error::ReserveAlreadyInitialized
    );
}

pub fn require_valid_reserve_configuration(env: &Env, config: &ReserveConfiguration) {
    require_lte_percentage_factor(env, config.liquidation_threshold);
    require_lte_percentage_factor(env, config.reserve_factor);

    assert_with_error!(
        env,
        config.ltv <= config.liquidation_threshold,
        Error::InvalidReserveParams
    );
    assert_with_error!(
        env,
        config.decimals <= MAX_DECIMALS,
        Error::InvalidReserveParams
    );
}

pub fn require_lte_percentage_factor(env: &Env, value: u32) {
    assert_with_error!(
        env,
        value <= PERCENTAGE_FACTOR,
        Error::MustBeLtePercentageFactor
    );
}

pub fn require_non_negative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    Ok(())
}
