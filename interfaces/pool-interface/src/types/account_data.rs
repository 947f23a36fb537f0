use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthFactor {
    /// User has no collateral and no debt flagged in any reserve
    Empty,
    /// User has no debt
    Infinite,
    /// Risk-adjusted collateral to debt ratio, ray. Below 1 ray the position is liquidatable.
    Value(u128),
}

impl HealthFactor {
    /// Returns ray value, maximum representable value for the empty and infinite states
    pub fn as_ray(&self) -> u128 {
        match self {
            HealthFactor::Value(value) => *value,
            HealthFactor::Empty | HealthFactor::Infinite => u128::MAX,
        }
    }
}

/// Snapshot of a user position across all reserves.
/// Values are expressed in the price feed unit of account.
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccountData {
    pub total_collateral: i128,
    pub total_debt: i128,
    pub available_borrows: i128,
    /// Collateral-weighted loan to value, 100% - 10_000
    pub avg_ltv: u32,
    /// Collateral-weighted liquidation threshold, 100% - 10_000
    pub avg_liquidation_threshold: u32,
    pub health_factor: HealthFactor,
}

impl UserAccountData {
    pub fn empty() -> Self {
        Self {
            total_collateral: 0,
            total_debt: 0,
            available_borrows: 0,
            avg_ltv: 0,
            avg_liquidation_threshold: 0,
            health_factor: HealthFactor::Empty,
        }
    }
}
