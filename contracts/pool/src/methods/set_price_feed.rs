use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_price_feed;

use super::utils::validation::require_admin;

pub fn set_price_feed(env: &Env, price_feed: &Address) -> Result<(), Error> {
    require_admin(env)?;

    write_price_feed(env, price_feed);

    event::price_feed_changed(env, price_feed);

    Ok(())
}
