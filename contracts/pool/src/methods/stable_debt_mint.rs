use pool_interface::types::error::Error;
use pool_interface::types::stable_debt::StableDebtMintResult;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    read_reserve, read_stable_debt_supply, read_user_stable_debt, write_stable_debt_supply,
    write_user_stable_debt,
};

use super::utils::stable_debt::{calc_mint, StableDebtMint};
use super::utils::validation::require_admin;

/// Adds `amount` of stable debt at `rate` to `who`, re-weighting the user and pool rates
pub fn stable_debt_mint(
    env: &Env,
    asset: &Address,
    who: &Address,
    amount: i128,
    rate: u128,
) -> Result<StableDebtMintResult, Error> {
    require_admin(env)?;
    read_reserve(env, asset)?;

    let user = read_user_stable_debt(env, asset, who);
    let supply = read_stable_debt_supply(env, asset);

    let StableDebtMint {
        user,
        supply,
        is_first_borrow,
        balance_increase,
    } = calc_mint(&user, &supply, amount, rate, env.ledger().timestamp())?;

    write_user_stable_debt(env, asset, who, &user);
    write_stable_debt_supply(env, asset, &supply);

    event::stable_debt_mint(
        env,
        asset,
        who,
        amount,
        balance_increase,
        user.rate,
        supply.avg_rate,
    );

    Ok(StableDebtMintResult {
        is_first_borrow,
        user_rate: user.rate,
        avg_rate: supply.avg_rate,
        total_supply: supply.principal,
    })
}
