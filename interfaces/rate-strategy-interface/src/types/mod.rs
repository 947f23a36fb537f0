pub mod interest_rates;
