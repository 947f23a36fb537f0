use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_reserve;

use super::utils::rate::calc_normalized_debt;

pub fn normalized_debt(env: &Env, asset: &Address) -> Result<u128, Error> {
    let reserve = read_reserve(env, asset)?;

    calc_normalized_debt(&reserve, env.ledger().timestamp())
}
