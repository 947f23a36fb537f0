use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_admin, write_price_feed};

use super::utils::validation::require_admin_not_exist;

pub fn initialize(env: &Env, admin: &Address, price_feed: &Address) -> Result<(), Error> {
    require_admin_not_exist(env);

    write_admin(env, admin);
    write_price_feed(env, price_feed);

    event::initialized(env, admin, price_feed);

    Ok(())
}
