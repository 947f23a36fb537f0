use soroban_sdk::{assert_with_error, contracttype, Env};

use crate::types::error::Error;

/// Maximum number of reserves a single bitmap can address
pub const MAX_RESERVES: u32 = u128::BITS / 2;

const BORROWING_MASK: u128 = 0x55555555555555555555555555555555;

/// Bitmap of the user flags per reserve id.
/// Bit `2 * id` is the borrowing flag, bit `2 * id + 1` is the collateral flag.
/// (flags bitmap, number of set flags)
#[contracttype]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserConfiguration(u128, u32);

impl UserConfiguration {
    pub fn set_borrowing(&mut self, env: &Env, reserve_index: u8, borrow: bool) {
        let was_borrowing = self.is_borrowing(env, reserve_index);
        self.set_bit(u32::from(reserve_index) * 2, borrow, was_borrowing);
    }

    pub fn set_using_as_collateral(
        &mut self,
        env: &Env,
        reserve_index: u8,
        use_as_collateral: bool,
    ) {
        let was_collateral = self.is_using_as_collateral(env, reserve_index);
        self.set_bit(
            u32::from(reserve_index) * 2 + 1,
            use_as_collateral,
            was_collateral,
        );
    }

    pub fn is_using_as_collateral(&self, env: &Env, reserve_index: u8) -> bool {
        Self::require_reserve_index(env, reserve_index);
        (self.0 >> (u32::from(reserve_index) * 2 + 1)) & 1 != 0
    }

    pub fn is_using_as_collateral_or_borrowing(&self, env: &Env, reserve_index: u8) -> bool {
        Self::require_reserve_index(env, reserve_index);
        (self.0 >> (u32::from(reserve_index) * 2)) & 3 != 0
    }

    pub fn is_borrowing(&self, env: &Env, reserve_index: u8) -> bool {
        Self::require_reserve_index(env, reserve_index);
        (self.0 >> (u32::from(reserve_index) * 2)) & 1 != 0
    }

    pub fn is_borrowing_any(&self) -> bool {
        self.0 & BORROWING_MASK != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of flags currently set across all reserves
    pub fn total_flags(&self) -> u32 {
        self.1
    }

    fn set_bit(&mut self, bit: u32, value: bool, previous: bool) {
        self.0 = (self.0 & !(1u128 << bit)) | (u128::from(value) << bit);

        if previous == value {
            return;
        }

        if value {
            self.1 += 1;
        } else {
            self.1 -= 1;
        }
    }

    fn require_reserve_index(env: &Env, reserve_index: u8) {
        assert_with_error!(
            env,
            u32::from(reserve_index) < MAX_RESERVES,
            Error::UserConfigInvalidIndex
        );
    }
}
