use common::RAY;
use soroban_sdk::{contracttype, Address, Env};

use super::error::Error;
use super::init_reserve_input::InitReserveInput;
use super::reserve_configuration::ReserveConfiguration;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct ReserveData {
    pub configuration: ReserveConfiguration,
    /// Cumulated liquidity index, ray
    pub liquidity_index: u128,
    /// Cumulated variable borrow index, ray
    pub variable_borrow_index: u128,
    /// Annual rate paid to depositors, ray
    pub current_liquidity_rate: u128,
    /// Annual variable borrow rate, ray
    pub current_variable_borrow_rate: u128,
    /// Annual stable borrow rate offered to new stable borrowers, ray
    pub current_stable_borrow_rate: u128,
    pub last_update_timestamp: u64,
    pub s_token_address: Address,
    pub debt_token_address: Address,
    pub rate_strategy_address: Address,
    /// The id of the reserve (position in the list of the reserves).
    pub id: u32,
}

impl ReserveData {
    pub fn new(env: &Env, input: &InitReserveInput) -> Self {
        Self {
            configuration: input.configuration.clone(),
            liquidity_index: RAY,
            variable_borrow_index: RAY,
            current_liquidity_rate: Default::default(),
            current_variable_borrow_rate: Default::default(),
            current_stable_borrow_rate: Default::default(),
            last_update_timestamp: env.ledger().timestamp(),
            s_token_address: input.s_token_address.clone(),
            debt_token_address: input.debt_token_address.clone(),
            rate_strategy_address: input.rate_strategy_address.clone(),
            id: 0,
        }
    }

    /// Reserve position as the user configuration bitmap index
    pub fn get_id(&self) -> Result<u8, Error> {
        u8::try_from(self.id).map_err(|_| Error::UserConfigInvalidIndex)
    }
}
