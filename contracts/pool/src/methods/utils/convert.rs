use common::{to_u128, U256};
use pool_interface::types::error::Error;

pub fn i128_to_u256(value: i128) -> Result<U256, Error> {
    u128::try_from(value)
        .map(U256::from)
        .map_err(|_| Error::MustBeNonNegative)
}

pub fn u256_to_i128(value: U256) -> Result<i128, Error> {
    to_u128(value)
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(Error::ArithmeticOverflow)
}

pub fn u256_to_index(value: U256) -> Result<u128, Error> {
    to_u128(value).ok_or(Error::IndexOverflow)
}

pub fn u256_to_rate(value: U256) -> Result<u128, Error> {
    to_u128(value).ok_or(Error::RateOverflow)
}
