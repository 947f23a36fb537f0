#![deny(warnings)]
#![no_std]

mod storage;

use crate::storage::*;
use price_feed_interface::{types::price_data::PriceData, PriceFeedTrait};
use soroban_sdk::{contract, contractimpl, Address, Env};

pub const DECIMALS: u32 = 14;

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    fn lastprice(env: Env, asset: Address) -> Option<PriceData> {
        read_asset_price(&env, &asset)
    }
}

#[contractimpl]
impl PriceFeedMock {
    pub fn set_price(env: Env, asset: Address, price: i128) {
        let timestamp = env.ledger().timestamp();
        write_asset_price(&env, &asset, &PriceData { price, timestamp });
    }
}
