use rate_strategy_interface::types::interest_rates::InterestRates;
use soroban_sdk::{contracttype, Address, Env};

/// Arguments of the last `calculate_interest_rates` call
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatesInput {
    pub asset: Address,
    pub liquidity_added: i128,
    pub liquidity_taken: i128,
    pub total_stable_debt: i128,
    pub total_variable_debt: i128,
    pub avg_stable_rate: u128,
    pub reserve_factor: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Rates,
    LastInput,
}

pub fn write_rates(env: &Env, rates: &InterestRates) {
    env.storage().instance().set(&DataKey::Rates, rates);
}

pub fn read_rates(env: &Env) -> Option<InterestRates> {
    env.storage().instance().get(&DataKey::Rates)
}

pub fn write_last_input(env: &Env, input: &RatesInput) {
    env.storage().instance().set(&DataKey::LastInput, input);
}

pub fn read_last_input(env: &Env) -> Option<RatesInput> {
    env.storage().instance().get(&DataKey::LastInput)
}
