pub mod configuration;
pub mod telemetry;
pub mod utils;
pub mod session_client;
pub mod navigation;
pub mod logout_handler;
