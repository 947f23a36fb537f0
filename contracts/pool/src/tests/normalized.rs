#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_pool, set_time, DAY, YEAR};
use crate::*;
use common::{compounded_interest, WadRayMath, RAY, U256};
use soroban_sdk::testutils::Address as _;

#[test]
fn should_return_stored_indexes_within_same_timestamp() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);

    sut.set_rates(0, RAY / 10, 0, RAY / 5);

    assert_eq!(sut.pool.normalized_income(&asset), RAY);
    assert_eq!(sut.pool.normalized_debt(&asset), RAY);
}

#[test]
fn should_project_income_for_one_year() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(0);
    let lender = Address::generate(&env);

    sut.reserves[0].s_token.set_scaled_balance(&lender, &1_000);
    sut.pool.set_as_collateral(&lender, &asset, &true);
    sut.set_rates(0, RAY / 10, 0, 0);

    set_time(&env, YEAR);

    let normalized_income = sut.pool.normalized_income(&asset);

    assert_eq!(normalized_income, 1_100_000_000_000_000_000_000_000_000);
    assert_eq!(
        U256::from(1_000u32)
            .ray_mul(U256::from(normalized_income))
            .unwrap(),
        U256::from(1_100u32)
    );
    // reserve 0 is priced one to one
    assert_eq!(sut.pool.account_data(&lender).total_collateral, 1_100);

    // projection doesn't touch storage
    assert_eq!(sut.pool.get_reserve(&asset).unwrap().liquidity_index, RAY);
    assert_eq!(
        sut.pool.update_state(&asset).liquidity_index,
        normalized_income
    );
}

#[test]
fn should_project_debt_with_compounding() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.asset(1);

    sut.set_rates(1, 0, 0, RAY / 10);

    set_time(&env, 7 * DAY);

    let expected = compounded_interest(U256::from(RAY / 10), 7 * DAY)
        .unwrap()
        .ray_mul(U256::from(RAY))
        .unwrap();

    assert_eq!(U256::from(sut.pool.normalized_debt(&asset)), expected);
    assert_eq!(sut.pool.normalized_income(&asset), RAY);
}
