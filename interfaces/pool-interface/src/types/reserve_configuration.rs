use soroban_sdk::contracttype;

/// Risk parameters of a reserve. Percentages are expressed as 1% - 100, 100% - 10_000.
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveConfiguration {
    /// Maximum part of the collateral value which can be borrowed against.
    pub ltv: u32,
    /// Part of the collateral value at which a position becomes undercollateralized.
    pub liquidation_threshold: u32,
    /// Part of the accrued interest which goes to the treasury.
    pub reserve_factor: u32,
    /// Decimals of the underlying asset.
    pub decimals: u32,
}
