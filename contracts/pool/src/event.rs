use pool_interface::types::init_reserve_input::InitReserveInput;
use pool_interface::types::reserve_data::ReserveData;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, price_feed: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin);
    e.events().publish(topics, price_feed.clone());
}

pub(crate) fn price_feed_changed(e: &Env, price_feed: &Address) {
    let topics = (Symbol::new(e, "price_feed_changed"),);
    e.events().publish(topics, price_feed.clone());
}

pub(crate) fn reserve_initialized(e: &Env, asset: &Address, id: u32, input: &InitReserveInput) {
    let topics = (Symbol::new(e, "init_reserve"), asset.clone());
    e.events().publish(
        topics,
        (
            id,
            input.s_token_address.clone(),
            input.debt_token_address.clone(),
            input.rate_strategy_address.clone(),
            input.configuration.ltv,
            input.configuration.liquidation_threshold,
            input.configuration.reserve_factor,
        ),
    );
}

pub(crate) fn reserve_data_updated(e: &Env, asset: &Address, reserve: &ReserveData) {
    let topics = (Symbol::new(e, "reserve_data_updated"), asset.clone());
    e.events().publish(
        topics,
        (
            reserve.current_liquidity_rate,
            reserve.current_stable_borrow_rate,
            reserve.current_variable_borrow_rate,
            reserve.liquidity_index,
            reserve.variable_borrow_index,
        ),
    );
}

pub(crate) fn treasury_accrued(e: &Env, asset: &Address, amount: i128, index: u128) {
    let topics = (Symbol::new(e, "treasury_accrued"), asset.clone());
    e.events().publish(topics, (amount, index));
}

pub(crate) fn stable_debt_mint(
    e: &Env,
    asset: &Address,
    who: &Address,
    amount: i128,
    balance_increase: i128,
    user_rate: u128,
    avg_rate: u128,
) {
    let topics = (Symbol::new(e, "stable_debt_mint"), asset.clone(), who.clone());
    e.events()
        .publish(topics, (amount, balance_increase, user_rate, avg_rate));
}

pub(crate) fn stable_debt_burn(
    e: &Env,
    asset: &Address,
    who: &Address,
    amount: i128,
    balance_increase: i128,
    avg_rate: u128,
) {
    let topics = (Symbol::new(e, "stable_debt_burn"), asset.clone(), who.clone());
    e.events()
        .publish(topics, (amount, balance_increase, avg_rate));
}

pub(crate) fn reserve_used_as_collateral_enabled(e: &Env, who: &Address, asset: &Address) {
    let topics = (Symbol::new(e, "reserve_used_as_coll_enabled"), who.clone());
    e.events().publish(topics, asset.clone());
}

pub(crate) fn reserve_used_as_collateral_disabled(e: &Env, who: &Address, asset: &Address) {
    let topics = (Symbol::new(e, "reserve_used_as_coll_disabled"), who.clone());
    e.events().publish(topics, asset.clone());
}

pub(crate) fn borrowing_enabled(e: &Env, who: &Address, asset: &Address) {
    let topics = (Symbol::new(e, "borrowing_enabled"), who.clone());
    e.events().publish(topics, asset.clone());
}

pub(crate) fn borrowing_disabled(e: &Env, who: &Address, asset: &Address) {
    let topics = (Symbol::new(e, "borrowing_disabled"), who.clone());
    e.events().publish(topics, asset.clone());
}
