#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
pub struct Spec;

/// Interface of the variable debt ledger. The pool core only reads it.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "DebtTokenClient")]
pub trait DebtTokenTrait {
    /// Returns scaled variable debt of `id`
    fn scaled_balance_of(env: Env, id: Address) -> i128;

    /// Returns sum of all scaled variable debts
    fn scaled_total_supply(env: Env) -> i128;
}
