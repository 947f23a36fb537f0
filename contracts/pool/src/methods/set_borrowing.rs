use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_reserve;
use crate::types::user_configurator::UserConfigurator;

use super::utils::validation::require_admin;

pub fn set_borrowing(
    env: &Env,
    who: &Address,
    asset: &Address,
    borrowing: bool,
) -> Result<(), Error> {
    require_admin(env)?;

    let reserve_id = read_reserve(env, asset)?.get_id()?;

    UserConfigurator::new(env, who)
        .set_borrowing(reserve_id, asset, borrowing)?
        .write();

    Ok(())
}
