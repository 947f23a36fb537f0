use price_feed_interface::types::price_data::PriceData;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Price(Address),
}

pub fn write_asset_price(env: &Env, asset: &Address, price: &PriceData) {
    env.storage()
        .instance()
        .set(&DataKey::Price(asset.clone()), price);
}

pub fn read_asset_price(env: &Env, asset: &Address) -> Option<PriceData> {
    env.storage().instance().get(&DataKey::Price(asset.clone()))
}
