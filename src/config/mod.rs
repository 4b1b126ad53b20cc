pub mod app_config;
pub mod error;

pub use app_config::AppConfig;
pub use error::{ConfigError, ConfigResult};
