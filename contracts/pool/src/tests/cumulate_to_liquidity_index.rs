#![cfg(test)]
extern crate std;

use crate::tests::sut::init_pool;
use crate::*;
use common::RAY;

#[test]
fn should_distribute_amount_to_liquidity() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    let index = sut.pool.cumulate_to_liquidity_index(&asset, &1_000, &100);

    assert_eq!(index, 1_100_000_000_000_000_000_000_000_000);
    assert_eq!(sut.pool.get_reserve(&asset).unwrap().liquidity_index, index);

    let index = sut.pool.cumulate_to_liquidity_index(&asset, &1_000, &0);

    assert_eq!(index, 1_100_000_000_000_000_000_000_000_000);
}

#[test]
fn should_fail_when_total_liquidity_is_not_positive() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    assert_eq!(
        sut.pool
            .try_cumulate_to_liquidity_index(&asset, &0, &100)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
    assert_eq!(
        sut.pool
            .try_cumulate_to_liquidity_index(&asset, &-1, &100)
            .unwrap_err()
            .unwrap(),
        Error::InvalidAmount
    );
    assert_eq!(sut.pool.get_reserve(&asset).unwrap().liquidity_index, RAY);
}

#[test]
fn should_fail_when_index_overflows() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    assert_eq!(
        sut.pool
            .try_cumulate_to_liquidity_index(&asset, &1, &1_000_000_000_000_000_000_000_000_000_000)
            .unwrap_err()
            .unwrap(),
        Error::IndexOverflow
    );
    assert_eq!(sut.pool.get_reserve(&asset).unwrap().liquidity_index, RAY);
}
