use crate::{BackendConfig, KvBox, KvStore, PinFuture};
use dashmap::DashMap;
use serde_derive::Deserialize;

/// Data is only present in memory; used for tests and throwaway sessions.
#[derive(Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStoreConfig {}

impl BackendConfig for InMemoryStoreConfig {
    type Backend = InMemoryStore;

    fn to_backend(self) -> eyre::Result<KvBox> {
        Ok(KvBox::new(InMemoryStore::default()))
    }
}

impl KvStore for InMemoryStore {
    fn read(&self, key: &str) -> PinFuture<'_, eyre::Result<Option<String>>> {
        let value = self.entries.get(key).map(|v| v.value().clone());
        Box::pin(async move { Ok(value) })
    }

    fn write<'a>(&'a self, key: &'a str, value: &'a str) -> PinFuture<'a, eyre::Result<()>> {
        Box::pin(async move {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> PinFuture<'a, eyre::Result<()>> {
        Box::pin(async move {
            self.entries.remove(key);
            Ok(())
        })
    }
}
