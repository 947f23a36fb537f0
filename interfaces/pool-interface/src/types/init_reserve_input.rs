use soroban_sdk::{contracttype, Address};

use super::reserve_configuration::ReserveConfiguration;

#[contracttype]
#[derive(Clone)]
pub struct InitReserveInput {
    pub s_token_address: Address,
    pub debt_token_address: Address,
    pub rate_strategy_address: Address,
    pub configuration: ReserveConfiguration,
}
