use std::{future::Future, pin::Pin};

mod core {
    pub(crate) mod kv;
}

pub use self::core::kv::{BackendConfig, KvBox, KvStore};

pub mod backend {
    pub mod fs;
    pub mod in_memory;
}

pub mod adapter;
pub mod remote;
pub mod sync;

pub use adapter::StoreAdapter;
pub use remote::{RemoteMirror, Snapshot};

pub(crate) type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Clone, Debug)]
pub enum BuiltinBackendType {
    Fs,
    InMemory,
}
