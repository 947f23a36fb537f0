#![deny(warnings)]
#![no_std]

mod interest;
mod percentage_math;
#[cfg(test)]
mod test;
mod wad_ray_math;

pub use interest::*;
pub use percentage_math::*;
pub use wad_ray_math::*;

#[allow(warnings)]
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer used for every intermediate ray/wad product
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Seconds in year. Equal 365 * 24 * 60 * 60
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Narrows 256-bit value to u128. Returns None when value doesn't fit.
pub fn to_u128(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.as_u128())
    }
}
