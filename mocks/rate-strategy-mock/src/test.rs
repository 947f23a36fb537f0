use rate_strategy_interface::RateStrategyClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, U256};

use crate::{RateStrategyMock, RateStrategyMockClient, RatesInput};

#[test]
fn should_return_preset_rates_and_record_input() {
    let env = Env::default();
    let address = env.register_contract(None, RateStrategyMock);
    let strategy = RateStrategyClient::new(&env, &address);
    let mock = RateStrategyMockClient::new(&env, &address);
    let asset = Address::generate(&env);

    let zero = strategy.calculate_interest_rates(&asset, &0, &0, &0, &0, &0, &0);
    assert_eq!(zero.liquidity_rate, U256::from_u32(&env, 0));

    mock.set_rates(
        &U256::from_u32(&env, 1),
        &U256::from_u32(&env, 2),
        &U256::from_u32(&env, 3),
    );

    let rates = strategy.calculate_interest_rates(&asset, &10, &20, &30, &40, &50, &1_000);

    assert_eq!(rates.liquidity_rate, U256::from_u32(&env, 1));
    assert_eq!(rates.stable_borrow_rate, U256::from_u32(&env, 2));
    assert_eq!(rates.variable_borrow_rate, U256::from_u32(&env, 3));
    assert_eq!(
        mock.last_input(),
        Some(RatesInput {
            asset,
            liquidity_added: 10,
            liquidity_taken: 20,
            total_stable_debt: 30,
            total_variable_debt: 40,
            avg_stable_rate: 50,
            reserve_factor: 1_000,
        })
    );
}
