use crate::{remote::RemoteMirror, sync::MirrorHandle, KvBox};
use serde::{de::DeserializeOwned, Serialize};
use worklane_storage_core::{
    seed, ActivityEntry, Collection, Doc, Folder, Meeting, PriorityOption, Project, ScalarKey,
    StatusOption, Table, Task, User,
};

/// How many activity entries are kept; older entries fall off the end.
pub const ACTIVITY_CAP: usize = 100;

/// Typed persistence layer over a raw key-value backend. Reads fall back to
/// seed data when a collection is missing or unparsable; writes land locally
/// first and are then mirrored to the remote store without waiting.
pub struct StoreAdapter {
    kv: KvBox,
    mirror: Option<RemoteMirror>,
    pushes: Option<MirrorHandle>,
}

impl StoreAdapter {
    pub fn new(kv: KvBox, mirror: Option<RemoteMirror>) -> Self {
        let pushes = mirror.clone().map(MirrorHandle::spawn);
        StoreAdapter { kv, mirror, pushes }
    }

    pub fn local_only(kv: KvBox) -> Self {
        StoreAdapter {
            kv,
            mirror: None,
            pushes: None,
        }
    }

    /// One-shot startup hydrate: overwrite the local copy of every collection
    /// present in the remote document. Any failure is a logged no-op and the
    /// local state is used as-is.
    pub async fn hydrate(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        match mirror.fetch_snapshot().await {
            Ok(snapshot) => self.apply_snapshot(snapshot).await,
            Err(err) => tracing::warn!("remote hydrate skipped: {err}"),
        }
    }

    /// Replace the local copy of exactly the collections the snapshot
    /// carries; absent collections are left alone.
    pub async fn apply_snapshot(&self, snapshot: crate::Snapshot) {
        self.overwrite_local(Collection::Users, snapshot.users).await;
        self.overwrite_local(Collection::Tasks, snapshot.tasks).await;
        self.overwrite_local(Collection::Projects, snapshot.projects).await;
        self.overwrite_local(Collection::Tables, snapshot.tables).await;
        self.overwrite_local(Collection::Docs, snapshot.docs).await;
        self.overwrite_local(Collection::Folders, snapshot.folders).await;
        self.overwrite_local(Collection::Meetings, snapshot.meetings).await;
        self.overwrite_local(Collection::Activity, snapshot.activity).await;
        self.overwrite_local(Collection::Statuses, snapshot.statuses).await;
        self.overwrite_local(Collection::Priorities, snapshot.priorities).await;
    }

    async fn overwrite_local<T: Serialize>(&self, collection: Collection, rows: Option<Vec<T>>) {
        let Some(rows) = rows else { return };
        match serde_json::to_string(&rows) {
            Ok(payload) => {
                if let Err(err) = self.kv.write(collection.key(), &payload).await {
                    tracing::warn!("hydrate write for '{collection}' failed: {err}");
                }
            }
            Err(err) => tracing::warn!("hydrate encode for '{collection}' failed: {err}"),
        }
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
        fallback: Vec<T>,
    ) -> Vec<T> {
        match self.kv.read(collection.key()).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(rows) => rows,
                Err(err) => {
                    tracing::warn!("stored '{collection}' is unreadable, using seed: {err}");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!("reading '{collection}' failed, using seed: {err}");
                fallback
            }
        }
    }

    async fn set_collection<T: Serialize>(
        &self,
        collection: Collection,
        rows: &[T],
    ) -> eyre::Result<()> {
        let payload = serde_json::to_string(rows)?;
        self.kv.write(collection.key(), &payload).await?;
        if let Some(pushes) = &self.pushes {
            pushes.enqueue(collection, payload);
        }
        Ok(())
    }

    pub async fn get_users(&self) -> Vec<User> {
        self.get_collection(Collection::Users, seed::default_users()).await
    }

    pub async fn get_tasks(&self) -> Vec<Task> {
        self.get_collection(Collection::Tasks, Vec::new()).await
    }

    pub async fn get_projects(&self) -> Vec<Project> {
        self.get_collection(Collection::Projects, seed::default_projects()).await
    }

    pub async fn get_tables(&self) -> Vec<Table> {
        self.get_collection(Collection::Tables, seed::default_tables()).await
    }

    pub async fn get_docs(&self) -> Vec<Doc> {
        self.get_collection(Collection::Docs, Vec::new()).await
    }

    pub async fn get_folders(&self) -> Vec<Folder> {
        self.get_collection(Collection::Folders, Vec::new()).await
    }

    pub async fn get_meetings(&self) -> Vec<Meeting> {
        self.get_collection(Collection::Meetings, Vec::new()).await
    }

    pub async fn get_activity(&self) -> Vec<ActivityEntry> {
        self.get_collection(Collection::Activity, Vec::new()).await
    }

    pub async fn get_statuses(&self) -> Vec<StatusOption> {
        self.get_collection(Collection::Statuses, seed::default_statuses()).await
    }

    pub async fn get_priorities(&self) -> Vec<PriorityOption> {
        self.get_collection(Collection::Priorities, seed::default_priorities()).await
    }

    pub async fn set_users(&self, rows: &[User]) -> eyre::Result<()> {
        self.set_collection(Collection::Users, rows).await
    }

    pub async fn set_tasks(&self, rows: &[Task]) -> eyre::Result<()> {
        self.set_collection(Collection::Tasks, rows).await
    }

    pub async fn set_projects(&self, rows: &[Project]) -> eyre::Result<()> {
        self.set_collection(Collection::Projects, rows).await
    }

    pub async fn set_tables(&self, rows: &[Table]) -> eyre::Result<()> {
        self.set_collection(Collection::Tables, rows).await
    }

    pub async fn set_docs(&self, rows: &[Doc]) -> eyre::Result<()> {
        self.set_collection(Collection::Docs, rows).await
    }

    pub async fn set_folders(&self, rows: &[Folder]) -> eyre::Result<()> {
        self.set_collection(Collection::Folders, rows).await
    }

    pub async fn set_meetings(&self, rows: &[Meeting]) -> eyre::Result<()> {
        self.set_collection(Collection::Meetings, rows).await
    }

    pub async fn set_activity(&self, rows: &[ActivityEntry]) -> eyre::Result<()> {
        self.set_collection(Collection::Activity, rows).await
    }

    pub async fn set_statuses(&self, rows: &[StatusOption]) -> eyre::Result<()> {
        self.set_collection(Collection::Statuses, rows).await
    }

    pub async fn set_priorities(&self, rows: &[PriorityOption]) -> eyre::Result<()> {
        self.set_collection(Collection::Priorities, rows).await
    }

    /// Prepend an activity entry, keeping the newest [`ACTIVITY_CAP`] entries.
    pub async fn add_activity(&self, entry: ActivityEntry) -> eyre::Result<Vec<ActivityEntry>> {
        let mut entries = self.get_activity().await;
        entries.insert(0, entry);
        entries.truncate(ACTIVITY_CAP);
        self.set_activity(&entries).await?;
        Ok(entries)
    }

    pub async fn get_scalar(&self, key: ScalarKey) -> Option<String> {
        match self.kv.read(key.key()).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("reading '{key}' failed: {err}");
                None
            }
        }
    }

    pub async fn set_scalar(&self, key: ScalarKey, value: &str) -> eyre::Result<()> {
        self.kv.write(key.key(), value).await
    }

    pub async fn clear_scalar(&self, key: ScalarKey) -> eyre::Result<()> {
        self.kv.remove(key.key()).await
    }

    /// Drain outstanding mirror pushes so a short-lived process does not exit
    /// before its writes reach the remote store.
    pub async fn shutdown(self) {
        if let Some(pushes) = self.pushes {
            pushes.shutdown().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::in_memory::InMemoryStoreConfig;
    use crate::BackendConfig;
    use worklane_storage_core::Role;

    fn adapter() -> StoreAdapter {
        let kv = InMemoryStoreConfig::default().to_backend().unwrap();
        StoreAdapter::local_only(kv)
    }

    fn entry(n: usize) -> ActivityEntry {
        ActivityEntry {
            id: format!("act-{n}"),
            user_id: "u1".into(),
            user_name: "Alexander".into(),
            user_avatar: String::new(),
            action: "created task".into(),
            details: format!("task {n}"),
            timestamp: "2026-02-01T10:00:00Z".into(),
            read: false,
        }
    }

    #[tokio::test]
    async fn missing_collections_fall_back_to_seeds() {
        let store = adapter();
        assert!(store.get_tasks().await.is_empty());
        let users = store.get_users().await;
        assert!(!users.is_empty());
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(store.get_statuses().await.len(), 4);
    }

    #[tokio::test]
    async fn corrupt_payload_falls_back_to_seed() -> eyre::Result<()> {
        let kv = InMemoryStoreConfig::default().to_backend()?;
        kv.write("statuses", "{not json").await?;
        let store = StoreAdapter::local_only(kv);
        let statuses = store.get_statuses().await;
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0].name, "Not started");
        Ok(())
    }

    #[tokio::test]
    async fn set_then_get_round_trips() -> eyre::Result<()> {
        let store = adapter();
        let mut users = store.get_users().await;
        users[0].name = "Renamed".into();
        store.set_users(&users).await?;
        assert_eq!(store.get_users().await[0].name, "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn activity_is_newest_first_and_capped() -> eyre::Result<()> {
        let store = adapter();
        for n in 0..(ACTIVITY_CAP + 20) {
            store.add_activity(entry(n)).await?;
        }
        let entries = store.get_activity().await;
        assert_eq!(entries.len(), ACTIVITY_CAP);
        assert_eq!(entries[0].id, format!("act-{}", ACTIVITY_CAP + 19));
        Ok(())
    }

    #[tokio::test]
    async fn snapshot_overwrites_only_the_collections_it_carries() -> eyre::Result<()> {
        let store = adapter();
        let mut users = store.get_users().await;
        users[0].name = "Renamed".into();
        store.set_users(&users).await?;

        store
            .apply_snapshot(crate::Snapshot {
                tasks: Some(vec![]),
                statuses: Some(seed::default_statuses()[..2].to_vec()),
                ..Default::default()
            })
            .await;

        assert_eq!(store.get_statuses().await.len(), 2);
        assert!(store.get_tasks().await.is_empty());
        // Absent from the snapshot, so the local copy wins.
        assert_eq!(store.get_users().await[0].name, "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_remote_leaves_local_state_untouched() -> eyre::Result<()> {
        let kv = InMemoryStoreConfig::default().to_backend()?;
        let mirror = crate::RemoteMirror::new("http://127.0.0.1:9/worklane")?;
        let store = StoreAdapter::new(kv, Some(mirror));

        let mut users = store.get_users().await;
        users[0].name = "Renamed".into();
        store.set_users(&users).await?;

        store.hydrate().await;
        assert_eq!(store.get_users().await[0].name, "Renamed");
        store.shutdown().await;
        Ok(())
    }

    #[tokio::test]
    async fn scalar_keys_round_trip() -> eyre::Result<()> {
        let store = adapter();
        assert_eq!(store.get_scalar(ScalarKey::Session).await, None);
        store.set_scalar(ScalarKey::Session, "u2").await?;
        assert_eq!(store.get_scalar(ScalarKey::Session).await.as_deref(), Some("u2"));
        store.clear_scalar(ScalarKey::Session).await?;
        assert_eq!(store.get_scalar(ScalarKey::Session).await, None);
        Ok(())
    }
}
