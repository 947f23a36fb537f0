pub mod price_provider;
pub mod user_configurator;
