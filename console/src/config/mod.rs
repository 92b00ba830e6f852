mod config;

pub use config::{ConsoleConfig, get_config_path};
