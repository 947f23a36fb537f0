use pool_interface::types::error::Error;
use price_feed_interface::PriceFeedClient;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Address, Env, Map};

use crate::storage::read_price_feed;

/// Converts asset amounts into the price feed unit of account.
/// Each asset price is requested from the feed once per invocation.
pub struct PriceProvider<'a> {
    env: &'a Env,
    feed: Address,
    prices: Map<Address, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        Ok(Self {
            env,
            feed: read_price_feed(env)?,
            prices: Map::new(env),
        })
    }

    /// `price * amount / 10^decimals`
    pub fn convert(&mut self, asset: &Address, decimals: u32, amount: i128) -> Result<i128, Error> {
        let price = self.price(asset)?;
        let unit = 10i128
            .checked_pow(decimals)
            .ok_or(Error::CalcAccountDataMathError)?;

        price
            .fixed_mul_floor(amount, unit)
            .ok_or(Error::CalcAccountDataMathError)
    }

    fn price(&mut self, asset: &Address) -> Result<i128, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let price_data = PriceFeedClient::new(self.env, &self.feed)
            .lastprice(asset)
            .ok_or(Error::NoPriceForAsset)?;

        if price_data.price <= 0 {
            return Err(Error::InvalidAssetPrice);
        }

        self.prices.set(asset.clone(), price_data.price);

        Ok(price_data.price)
    }
}
