use pool_interface::types::error::Error;
use pool_interface::types::init_reserve_input::InitReserveInput;
use pool_interface::types::reserve_data::ReserveData;
use pool_interface::types::user_config::MAX_RESERVES;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::{read_reserves, write_reserve, write_reserves};

use super::utils::validation::{
    require_admin, require_uninitialized_reserve, require_valid_reserve_configuration,
};

pub fn init_reserve(env: &Env, asset: &Address, input: &InitReserveInput) -> Result<(), Error> {
    require_admin(env)?;
    require_uninitialized_reserve(env, asset);
    require_valid_reserve_configuration(env, &input.configuration);

    let mut reserve_data = ReserveData::new(env, input);
    let mut reserves = read_reserves(env);
    let id = reserves.len();

    assert_with_error!(env, id < MAX_RESERVES, Error::ReservesMaxCapacityExceeded);

    reserve_data.id = id;
    reserves.push_back(asset.clone());

    write_reserves(env, &reserves);
    write_reserve(env, asset, &reserve_data);

    event::reserve_initialized(env, asset, id, input);

    Ok(())
}
