use pool_interface::types::error::Error;
use pool_interface::types::stable_debt::{StableDebtSupplyData, UserStableDebt};
use soroban_sdk::{Address, Env};

use crate::storage::{read_stable_debt_supply, read_user_stable_debt};

use super::utils::stable_debt::{calc_balance, calc_total_supply};

pub fn stable_debt_balance(env: &Env, asset: &Address, who: &Address) -> Result<i128, Error> {
    let user = read_user_stable_debt(env, asset, who);

    calc_balance(&user, env.ledger().timestamp())
}

pub fn stable_debt_user(env: &Env, asset: &Address, who: &Address) -> UserStableDebt {
    read_user_stable_debt(env, asset, who)
}

pub fn stable_debt_total_supply(env: &Env, asset: &Address) -> Result<i128, Error> {
    let supply = read_stable_debt_supply(env, asset);

    calc_total_supply(&supply, env.ledger().timestamp())
}

pub fn stable_debt_supply_data(env: &Env, asset: &Address) -> Result<StableDebtSupplyData, Error> {
    let supply = read_stable_debt_supply(env, asset);

    Ok(StableDebtSupplyData {
        principal_supply: supply.principal,
        total_supply: calc_total_supply(&supply, env.ledger().timestamp())?,
        avg_rate: supply.avg_rate,
        timestamp: supply.timestamp,
    })
}
