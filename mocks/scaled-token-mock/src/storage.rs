use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Balance(Address),
    TotalSupply,
    TreasuryAccrued,
    LastTreasuryIndex,
}

pub fn read_scaled_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn write_scaled_balance(env: &Env, id: &Address, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Balance(id.clone()), &balance);
}

pub fn read_scaled_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_scaled_total_supply(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &total);
}

pub fn read_treasury_accrued(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TreasuryAccrued)
        .unwrap_or(0)
}

pub fn write_treasury_accrued(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TreasuryAccrued, &amount);
}

pub fn read_last_treasury_index(env: &Env) -> Option<u128> {
    env.storage().instance().get(&DataKey::LastTreasuryIndex)
}

pub fn write_last_treasury_index(env: &Env, index: u128) {
    env.storage()
        .instance()
        .set(&DataKey::LastTreasuryIndex, &index);
}
