use debt_token_interface::DebtTokenClient;
use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use s_token_interface::STokenClient;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, read_stable_debt_supply, write_reserve};

use super::utils::get_elapsed_time::get_elapsed_time;
use super::utils::rate::{calc_updated_state, UpdatedState};
use super::utils::validation::require_admin;

pub fn update_state(env: &Env, asset: &Address) -> Result<ReserveData, Error> {
    require_admin(env)?;

    let reserve = read_reserve(env, asset)?;
    let current_time = env.ledger().timestamp();

    if get_elapsed_time(reserve.last_update_timestamp, current_time)? == 0 {
        return Ok(reserve);
    }

    let scaled_variable_debt =
        DebtTokenClient::new(env, &reserve.debt_token_address).scaled_total_supply();
    let stable_supply = read_stable_debt_supply(env, asset);

    let UpdatedState {
        reserve,
        treasury_amount,
    } = calc_updated_state(&reserve, scaled_variable_debt, &stable_supply, current_time)?;

    write_reserve(env, asset, &reserve);

    if treasury_amount != 0 {
        STokenClient::new(env, &reserve.s_token_address)
            .mint_to_treasury(&treasury_amount, &reserve.liquidity_index);

        event::treasury_accrued(env, asset, treasury_amount, reserve.liquidity_index);
    }

    event::reserve_data_updated(env, asset, &reserve);

    Ok(reserve)
}
