#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_pool, set_time, DAY, YEAR};
use crate::*;
use common::{compounded_interest, WadRayMath, RAY, U256};
use soroban_sdk::testutils::Address as _;

#[test]
fn should_be_noop_within_same_timestamp() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(1);

    sut.reserves[1]
        .debt_token
        .set_scaled_balance(&Address::generate(&env), &1_000);
    sut.set_rates(1, RAY / 20, 0, RAY / 10);

    set_time(&env, 10 * DAY);

    let first = sut.pool.update_state(&asset);
    let second = sut.pool.update_state(&asset);

    assert_eq!(first, second);
    assert_eq!(sut.pool.get_reserve(&asset).unwrap(), second);
    assert_eq!(second.last_update_timestamp, 10 * DAY);
}

#[test]
fn should_accrue_liquidity_index_linearly() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    sut.set_rates(0, RAY / 10, 0, 0);

    set_time(&env, YEAR);

    let reserve = sut.pool.update_state(&asset);

    assert_eq!(reserve.liquidity_index, 1_100_000_000_000_000_000_000_000_000);
    // no variable debt
    assert_eq!(reserve.variable_borrow_index, RAY);
}

#[test]
fn should_compound_variable_borrow_index() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(1);

    sut.reserves[1]
        .debt_token
        .set_scaled_balance(&Address::generate(&env), &1_000);
    sut.set_rates(1, RAY / 20, 0, RAY / 10);

    set_time(&env, DAY);

    let reserve = sut.pool.update_state(&asset);
    let expected = compounded_interest(U256::from(RAY / 10), DAY)
        .unwrap()
        .ray_mul(U256::from(RAY))
        .unwrap();

    assert_eq!(U256::from(reserve.variable_borrow_index), expected);
    assert!(reserve.variable_borrow_index > RAY);
}

#[test]
fn should_freeze_indexes_when_liquidity_rate_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(1);

    sut.reserves[1]
        .debt_token
        .set_scaled_balance(&Address::generate(&env), &1_000);
    sut.set_rates(1, 0, 0, RAY / 10);

    set_time(&env, YEAR);

    let reserve = sut.pool.update_state(&asset);

    assert_eq!(reserve.liquidity_index, RAY);
    assert_eq!(reserve.variable_borrow_index, RAY);
    assert_eq!(reserve.last_update_timestamp, YEAR);
}

#[test]
fn should_never_decrease_indexes() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(2);

    sut.reserves[2]
        .debt_token
        .set_scaled_balance(&Address::generate(&env), &1_000_000);

    let rates = [
        (RAY / 100, RAY / 50),
        (0, RAY / 10),
        (RAY, 3 * RAY),
        (1, 1),
        (RAY / 20, 0),
    ];

    let mut prev = sut.pool.get_reserve(&asset).unwrap();
    let mut time = 0;

    for (liquidity_rate, variable_rate) in rates {
        sut.set_rates(2, liquidity_rate, 0, variable_rate);

        for elapsed in [1, 60, DAY, 30 * DAY] {
            time += elapsed;
            set_time(&env, time);

            let reserve = sut.pool.update_state(&asset);

            assert!(reserve.liquidity_index >= prev.liquidity_index);
            assert!(reserve.variable_borrow_index >= prev.variable_borrow_index);

            prev = reserve;
        }
    }
}

#[test]
fn should_fail_when_time_moves_backward() {
    let env = Env::default();
    env.mock_all_auths();

    set_time(&env, 100);

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    set_time(&env, 50);

    assert_eq!(
        sut.pool.try_update_state(&asset).unwrap_err().unwrap(),
        Error::StaleTimestamp
    );
    assert_eq!(
        sut.pool.try_normalized_income(&asset).unwrap_err().unwrap(),
        Error::StaleTimestamp
    );
}

#[test]
fn should_fail_when_index_overflows() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);
    let index_before = sut.pool.cumulate_to_liquidity_index(&asset, &1, &100_000_000_000);

    sut.set_rates(0, u128::MAX / 2, 0, 0);

    set_time(&env, YEAR);

    assert_eq!(
        sut.pool.try_update_state(&asset).unwrap_err().unwrap(),
        Error::IndexOverflow
    );
    assert_eq!(
        sut.pool.get_reserve(&asset).unwrap().liquidity_index,
        index_before
    );
}

#[test]
fn should_fail_for_unknown_reserve() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool
            .try_update_state(&Address::generate(&env))
            .unwrap_err()
            .unwrap(),
        Error::NoReserveExistForAsset
    );
}
