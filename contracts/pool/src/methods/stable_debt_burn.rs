use pool_interface::types::error::Error;
use pool_interface::types::stable_debt::StableDebtBurnResult;
use soroban_sdk::{log, Address, Env};

use crate::event;
use crate::storage::{
    read_reserve, read_stable_debt_supply, read_user_stable_debt, write_stable_debt_supply,
    write_user_stable_debt,
};

use super::utils::stable_debt::{calc_burn, StableDebtBurn};
use super::utils::validation::require_admin;

/// Removes `amount` of stable debt of `who`, interest accrued since the last update is settled first
pub fn stable_debt_burn(
    env: &Env,
    asset: &Address,
    who: &Address,
    amount: i128,
) -> Result<StableDebtBurnResult, Error> {
    require_admin(env)?;
    read_reserve(env, asset)?;

    let user = read_user_stable_debt(env, asset, who);
    let supply = read_stable_debt_supply(env, asset);

    let StableDebtBurn {
        user,
        supply,
        balance_increase,
        accumulation_underflow,
    } = calc_burn(&user, &supply, amount, env.ledger().timestamp())?;

    if accumulation_underflow {
        log!(
            env,
            "stable debt supply flushed to zero on avg rate underflow",
            asset.clone(),
            amount
        );
    }

    write_user_stable_debt(env, asset, who, &user);
    write_stable_debt_supply(env, asset, &supply);

    event::stable_debt_burn(env, asset, who, amount, balance_increase, supply.avg_rate);

    Ok(StableDebtBurnResult {
        user_rate: user.rate,
        avg_rate: supply.avg_rate,
        total_supply: supply.principal,
    })
}
