mod config_file;
mod validate;

pub use config_file::ConfigFile;
pub use validate::Validate;
