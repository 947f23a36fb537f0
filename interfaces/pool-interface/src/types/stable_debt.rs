use soroban_sdk::contracttype;

/// Pool-wide stable debt aggregate of a reserve
#[contracttype]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StableDebtSupply {
    /// Total principal, re-anchored to the compounded total on every mint and burn
    pub principal: i128,
    /// Principal-weighted average of users stable rates, ray
    pub avg_rate: u128,
    pub timestamp: u64,
}

/// Stable debt of a single user in a reserve
#[contracttype]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStableDebt {
    /// Principal including interest folded in on the last mint or burn
    pub principal: i128,
    /// User's own weighted stable rate, ray
    pub rate: u128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableDebtSupplyData {
    pub principal_supply: i128,
    /// Principal compounded at the average rate up to now
    pub total_supply: i128,
    pub avg_rate: u128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableDebtMintResult {
    /// True when the user had no stable debt before the mint
    pub is_first_borrow: bool,
    pub user_rate: u128,
    pub avg_rate: u128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableDebtBurnResult {
    pub user_rate: u128,
    pub avg_rate: u128,
    pub total_supply: i128,
}
