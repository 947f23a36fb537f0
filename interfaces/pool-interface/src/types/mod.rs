pub mod account_data;
pub mod error;
pub mod init_reserve_input;
pub mod reserve_configuration;
pub mod reserve_data;
pub mod stable_debt;
pub mod user_config;
