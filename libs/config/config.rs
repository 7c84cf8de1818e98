use serde_derive::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreConfig {
    /// Where local collections are stored; defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Base URL of the remote JSON document store. Unset disables mirroring.
    pub remote_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    pub telegram: Option<TelegramConfig>,
}
