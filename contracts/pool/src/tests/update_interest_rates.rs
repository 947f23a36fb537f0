#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_pool, set_time, RESERVE_FACTOR, YEAR};
use crate::*;
use common::{compounded_interest, WadRayMath, RAY};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::U256;

#[test]
fn should_store_rates_from_strategy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    sut.reserves[0].rate_strategy.set_rates(
        &U256::from_u128(&env, RAY / 50),
        &U256::from_u128(&env, RAY / 8),
        &U256::from_u128(&env, RAY / 10),
    );

    let reserve = sut.pool.update_interest_rates(&asset, &0, &0);

    assert_eq!(reserve.current_liquidity_rate, RAY / 50);
    assert_eq!(reserve.current_stable_borrow_rate, RAY / 8);
    assert_eq!(reserve.current_variable_borrow_rate, RAY / 10);
    assert_eq!(sut.pool.get_reserve(&asset).unwrap(), reserve);
}

#[test]
fn should_pass_reserve_debt_to_strategy() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(1);

    sut.reserves[1]
        .debt_token
        .set_scaled_balance(&Address::generate(&env), &1_000);
    sut.set_rates(1, RAY / 20, 0, RAY / 10);

    set_time(&env, YEAR);

    let reserve = sut.pool.update_state(&asset);
    sut.pool
        .stable_debt_mint(&asset, &Address::generate(&env), &500, &(RAY / 10));

    sut.pool.update_interest_rates(&asset, &10, &5);

    let input = sut.reserves[1].rate_strategy.last_input().unwrap();
    let total_variable_debt = common::U256::from(1_000u32)
        .ray_mul(compounded_interest(common::U256::from(RAY / 10), YEAR).unwrap())
        .unwrap();

    assert_eq!(input.asset, asset);
    assert_eq!(input.liquidity_added, 10);
    assert_eq!(input.liquidity_taken, 5);
    assert_eq!(input.total_variable_debt as u128, total_variable_debt.as_u128());
    assert_eq!(
        input.total_variable_debt,
        common::U256::from(1_000u32)
            .ray_mul(common::U256::from(reserve.variable_borrow_index))
            .unwrap()
            .as_u128() as i128
    );
    assert_eq!(
        input.total_stable_debt,
        sut.pool.stable_debt_total_supply(&asset)
    );
    assert_eq!(
        input.avg_stable_rate,
        sut.pool.stable_debt_supply_data(&asset).avg_rate
    );
    assert_eq!(input.reserve_factor, RESERVE_FACTOR);
}

#[test]
fn should_fail_when_rate_overflows() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    sut.set_rates(0, RAY / 50, RAY / 8, RAY / 10);
    let before = sut.pool.get_reserve(&asset).unwrap();

    let too_big = U256::from_u128(&env, u128::MAX).add(&U256::from_u32(&env, 1));
    sut.reserves[0].rate_strategy.set_rates(
        &U256::from_u128(&env, RAY / 50),
        &U256::from_u128(&env, RAY / 8),
        &too_big,
    );

    assert_eq!(
        sut.pool
            .try_update_interest_rates(&asset, &0, &0)
            .unwrap_err()
            .unwrap(),
        Error::RateOverflow
    );
    assert_eq!(sut.pool.get_reserve(&asset).unwrap(), before);
}

#[test]
fn should_fail_with_negative_liquidity_change() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    assert_eq!(
        sut.pool
            .try_update_interest_rates(&asset, &-1, &0)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
    assert_eq!(
        sut.pool
            .try_update_interest_rates(&asset, &0, &-1)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
}

#[test]
fn should_fail_for_unknown_reserve() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool
            .try_update_interest_rates(&Address::generate(&env), &0, &0)
            .unwrap_err()
            .unwrap(),
        Error::NoReserveExistForAsset
    );
}
