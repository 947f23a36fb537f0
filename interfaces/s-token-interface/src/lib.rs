#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
pub struct Spec;

/// Interface of the deposit receipt token as seen by the pool core.
///
/// Balances are kept in scaled units, the real balance is the scaled one
/// multiplied by the reserve liquidity index.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "STokenClient")]
pub trait STokenTrait {
    /// Returns scaled balance of `id`
    fn scaled_balance_of(env: Env, id: Address) -> i128;

    /// Returns sum of all scaled balances
    fn scaled_total_supply(env: Env) -> i128;

    /// Credits protocol treasury with `amount` of underlying expressed at liquidity `index`.
    /// Treasury receives `amount / index` scaled units.
    fn mint_to_treasury(env: Env, amount: i128, index: u128);
}
