#![deny(warnings)]
#![no_std]

mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

/// Ledger of scaled balances exposing both the sToken and the debt token
/// views used by the pool core.
#[contract]
pub struct ScaledTokenMock;

#[contractimpl]
impl ScaledTokenMock {
    pub fn scaled_balance_of(env: Env, id: Address) -> i128 {
        read_scaled_balance(&env, &id)
    }

    pub fn scaled_total_supply(env: Env) -> i128 {
        read_scaled_total_supply(&env)
    }

    /// Records the treasury credit. Accumulated `amount` is returned by `treasury_accrued`.
    pub fn mint_to_treasury(env: Env, amount: i128, index: u128) {
        let accrued = read_treasury_accrued(&env) + amount;
        write_treasury_accrued(&env, accrued);
        write_last_treasury_index(&env, index);
    }

    pub fn set_scaled_balance(env: Env, id: Address, scaled_balance: i128) {
        let prev = read_scaled_balance(&env, &id);
        let total = read_scaled_total_supply(&env) - prev + scaled_balance;

        write_scaled_balance(&env, &id, scaled_balance);
        write_scaled_total_supply(&env, total);
    }

    pub fn treasury_accrued(env: Env) -> i128 {
        read_treasury_accrued(&env)
    }

    pub fn last_treasury_index(env: Env) -> Option<u128> {
        read_last_treasury_index(&env)
    }
}
