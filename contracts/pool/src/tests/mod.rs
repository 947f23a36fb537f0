
mod cumulate_to_liquidity_index;
mod normalized;
mod update_interest_rates;
mod update_state;
