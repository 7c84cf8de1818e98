mod config;
mod load_config;

pub use config::{Config, CoreConfig, TelegramConfig};
pub use load_config::{default_config_path, default_data_dir, load, load_or_default};
