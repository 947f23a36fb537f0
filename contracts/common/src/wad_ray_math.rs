use crate::U256;

/// 1e18
pub const WAD: u128 = 1_000_000_000_000_000_000;
/// 1e27
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const HALF_WAD: u128 = WAD / 2;
pub const HALF_RAY: u128 = RAY / 2;
/// 1e9
pub const WAD_RAY_RATIO: u128 = RAY / WAD;

/// Multiplication and division of wad (1e18) and ray (1e27) scaled values.
///
/// Every operation rounds half up and returns `None` when an intermediate
/// doesn't fit into 256 bits or the divisor is zero.
pub trait WadRayMath: Sized {
    /// `(self * other + RAY / 2) / RAY`
    fn ray_mul(self, other: Self) -> Option<Self>;

    /// `(self * RAY + other / 2) / other`
    fn ray_div(self, other: Self) -> Option<Self>;

    /// `(self * other + WAD / 2) / WAD`
    fn wad_mul(self, other: Self) -> Option<Self>;

    /// `(self * WAD + other / 2) / other`
    fn wad_div(self, other: Self) -> Option<Self>;

    /// Converts ray down to wad rounding half up
    fn ray_to_wad(self) -> Option<Self>;

    /// Converts wad up to ray
    fn wad_to_ray(self) -> Option<Self>;
}

impl WadRayMath for U256 {
    fn ray_mul(self, other: Self) -> Option<Self> {
        mul_half_up(self, other, U256::from(RAY), U256::from(HALF_RAY))
    }

    fn ray_div(self, other: Self) -> Option<Self> {
        div_half_up(self, other, U256::from(RAY))
    }

    fn wad_mul(self, other: Self) -> Option<Self> {
        mul_half_up(self, other, U256::from(WAD), U256::from(HALF_WAD))
    }

    fn wad_div(self, other: Self) -> Option<Self> {
        div_half_up(self, other, U256::from(WAD))
    }

    fn ray_to_wad(self) -> Option<Self> {
        let half_ratio = U256::from(WAD_RAY_RATIO / 2);

        self.checked_add(half_ratio)?
            .checked_div(U256::from(WAD_RAY_RATIO))
    }

    fn wad_to_ray(self) -> Option<Self> {
        self.checked_mul(U256::from(WAD_RAY_RATIO))
    }
}

/// One ray as U256
pub fn ray() -> U256 {
    U256::from(RAY)
}

/// One wad as U256
pub fn wad() -> U256 {
    U256::from(WAD)
}

fn mul_half_up(a: U256, b: U256, scale: U256, half_scale: U256) -> Option<U256> {
    if a.is_zero() || b.is_zero() {
        return Some(U256::zero());
    }

    a.checked_mul(b)?.checked_add(half_scale)?.checked_div(scale)
}

fn div_half_up(a: U256, b: U256, scale: U256) -> Option<U256> {
    if b.is_zero() {
        return None;
    }

    let half_b = b / U256::from(2u8);

    a.checked_mul(scale)?.checked_add(half_b)?.checked_div(b)
}
