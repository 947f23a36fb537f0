use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_reserve;
use crate::types::user_configurator::UserConfigurator;

use super::utils::validation::require_admin;

pub fn set_as_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    use_as_collateral: bool,
) -> Result<(), Error> {
    require_admin(env)?;

    let reserve_id = read_reserve(env, asset)?.get_id()?;

    UserConfigurator::new(env, who)
        .set_collateral(reserve_id, asset, use_as_collateral)?
        .write();

    Ok(())
}
