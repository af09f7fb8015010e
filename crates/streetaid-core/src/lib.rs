pub mod app_config;
pub mod config;
pub mod error;
pub mod locations;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use locations::{named_location, Coordinate, NamedLocation, NAMED_LOCATIONS};
