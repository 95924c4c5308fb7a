pub mod configuration;
pub mod logging;
