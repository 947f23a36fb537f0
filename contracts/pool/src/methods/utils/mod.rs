pub mod convert;
pub mod get_elapsed_time;
pub mod health_factor;
pub mod rate;
pub mod stable_debt;
pub mod validation;
