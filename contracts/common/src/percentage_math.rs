use crate::{U256, PERCENTAGE_FACTOR};

const HALF_PERCENT: u32 = PERCENTAGE_FACTOR / 2;

/// Percentage math with two decimals precision, 100% - 10_000.
/// Rounds half up.
pub trait PercentageMath: Sized {
    /// `(self * percentage + HALF_PERCENT) / PERCENTAGE_FACTOR`
    fn percent_mul(self, percentage: u32) -> Option<Self>;

    /// `(self * PERCENTAGE_FACTOR + percentage / 2) / percentage`
    fn percent_div(self, percentage: u32) -> Option<Self>;
}

impl PercentageMath for U256 {
    fn percent_mul(self, percentage: u32) -> Option<Self> {
        if self.is_zero() || percentage == 0 {
            return Some(U256::zero());
        }

        self.checked_mul(U256::from(percentage))?
            .checked_add(U256::from(HALF_PERCENT))?
            .checked_div(U256::from(PERCENTAGE_FACTOR))
    }

    fn percent_div(self, percentage: u32) -> Option<Self> {
        if percentage == 0 {
            return None;
        }

        self.checked_mul(U256::from(PERCENTAGE_FACTOR))?
            .checked_add(U256::from(percentage / 2))?
            .checked_div(U256::from(percentage))
    }
}
