pub mod account_data;
pub mod balance_decrease_allowed;
pub mod cumulate_to_liquidity_index;
pub mod init_reserve;
pub mod initialize;
pub mod normalized_debt;
pub mod normalized_income;
pub mod set_as_collateral;
pub mod set_borrowing;
pub mod set_price_feed;
pub mod stable_debt;
pub mod stable_debt_burn;
pub mod stable_debt_mint;
pub mod update_interest_rates;
pub mod update_state;

pub mod utils;
