use soroban_sdk::{contracttype, U256};

/// Annual rates expressed in ray.
///
/// Rates are 256-bit wide, the pool rejects values which don't fit its u128 storage.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterestRates {
    pub liquidity_rate: U256,
    pub stable_borrow_rate: U256,
    pub variable_borrow_rate: U256,
}
