use std::path::{Path, PathBuf};

use crate::Config;
use directories_next::ProjectDirs;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let expanded = shellexpand::tilde(config_path).to_string();
    let content = read_file_content_if_exist(&expanded)?
        .ok_or_else(|| eyre::eyre!("config path '{config_path}' was not found"))?;

    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Like [`load`], but a missing file yields the default configuration
/// (local-only store, no mirroring, no notifications).
pub fn load_or_default(config_path: &str) -> eyre::Result<Config> {
    let expanded = shellexpand::tilde(config_path).to_string();
    match read_file_content_if_exist(&expanded)? {
        Some(content) => Ok(toml::from_str(&content)?),
        None => Ok(Config::default()),
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let dirs = project_dirs()?;
    Ok(dirs.config_dir().join("config.toml"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let dirs = project_dirs()?;
    Ok(dirs.data_dir().to_path_buf())
}

fn project_dirs() -> eyre::Result<ProjectDirs> {
    ProjectDirs::from("", "", "worklane")
        .ok_or_else(|| eyre::eyre!("could not determine a home directory"))
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults() -> eyre::Result<()> {
        let config = load_or_default("/definitely/not/here.toml")?;
        assert!(config.core.remote_url.is_none());
        assert!(config.telegram.is_none());
        Ok(())
    }

    #[test]
    fn parses_full_config() -> eyre::Result<()> {
        let config: Config = toml::from_str(
            r#"
            [core]
            data_dir = "/tmp/worklane"
            remote_url = "https://db.example.net/app"

            [telegram]
            bot_token = "123:abc"
            chat_id = "-100500"
            "#,
        )?;
        assert_eq!(
            config.core.remote_url.as_deref(),
            Some("https://db.example.net/app")
        );
        assert_eq!(config.telegram.unwrap().chat_id, "-100500");
        Ok(())
    }
}
