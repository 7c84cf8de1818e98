use crate::PinFuture;
use derive_more::{Deref, DerefMut};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct KvBox(pub Box<dyn KvStore>);

impl KvBox {
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self(Box::new(store))
    }
}

/// Raw string key-value persistence; one value per named key.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> PinFuture<'_, eyre::Result<Option<String>>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write<'a>(&'a self, key: &'a str, value: &'a str) -> PinFuture<'a, eyre::Result<()>>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove<'a>(&'a self, key: &'a str) -> PinFuture<'a, eyre::Result<()>>;
}

pub trait BackendConfig {
    type Backend: KvStore;

    fn to_backend(self) -> eyre::Result<KvBox>;
}
