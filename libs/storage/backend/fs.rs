use crate::{BackendConfig, KvBox, KvStore, PinFuture};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

/// Stores every key as `<data_dir>/<key>.json`.
pub struct FsStore {
    data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct FsStoreConfig {
    pub data_dir: PathBuf,
}

impl BackendConfig for FsStoreConfig {
    type Backend = FsStore;

    fn to_backend(self) -> eyre::Result<KvBox> {
        Ok(KvBox::new(FsStore::open(&self.data_dir)?))
    }
}

impl FsStore {
    pub fn open(data_dir: &Path) -> eyre::Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Ok(FsStore {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KvStore for FsStore {
    fn read(&self, key: &str) -> PinFuture<'_, eyre::Result<Option<String>>> {
        let path = self.path_for(key);
        Box::pin(async move {
            if !path.exists() {
                return Ok(None);
            }
            Ok(Some(std::fs::read_to_string(&path)?))
        })
    }

    fn write<'a>(&'a self, key: &'a str, value: &'a str) -> PinFuture<'a, eyre::Result<()>> {
        let path = self.path_for(key);
        Box::pin(async move {
            std::fs::write(&path, value)?;
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> PinFuture<'a, eyre::Result<()>> {
        let path = self.path_for(key);
        Box::pin(async move {
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_round_trips() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FsStore::open(dir.path())?;
        assert_eq!(store.read("tasks").await?, None);
        store.write("tasks", "[]").await?;
        assert_eq!(store.read("tasks").await?.as_deref(), Some("[]"));
        store.remove("tasks").await?;
        assert_eq!(store.read("tasks").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn removing_absent_key_is_fine() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FsStore::open(dir.path())?;
        store.remove("nothing").await?;
        Ok(())
    }
}
