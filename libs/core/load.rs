use crate::{filter::TaskFilter, Workspace};
use tokio::task::JoinSet;
use worklane_config::Config;
use worklane_notify::Notifier;
use worklane_storage::{
    backend::{fs::FsStoreConfig, in_memory::InMemoryStoreConfig},
    BackendConfig, BuiltinBackendType, RemoteMirror, StoreAdapter,
};
use worklane_storage_core::{seed, ScalarKey, Table, TableKind};

pub async fn load(config: &Config) -> eyre::Result<Workspace> {
    load_with_backend(config, BuiltinBackendType::Fs).await
}

pub async fn load_with_backend(
    config: &Config,
    backend_type: BuiltinBackendType,
) -> eyre::Result<Workspace> {
    let kv = match backend_type {
        BuiltinBackendType::Fs => {
            let data_dir = match &config.core.data_dir {
                Some(dir) => dir.clone(),
                None => worklane_config::default_data_dir()?,
            };
            FsStoreConfig { data_dir }.to_backend()?
        }
        BuiltinBackendType::InMemory => InMemoryStoreConfig::default().to_backend()?,
    };

    let mirror = match &config.core.remote_url {
        Some(url) => Some(RemoteMirror::new(url)?),
        None => None,
    };

    let notifier = match &config.telegram {
        Some(telegram) => Some(Notifier::new(&telegram.bot_token, &telegram.chat_id)?),
        None => None,
    };

    let store = StoreAdapter::new(kv, mirror);
    Workspace::from_store(store, notifier).await
}

impl Workspace {
    /// Hydrate once from the remote (best effort), read every collection with
    /// seed fallback, and restore the saved session when it still resolves.
    pub async fn from_store(
        store: StoreAdapter,
        notifier: Option<Notifier>,
    ) -> eyre::Result<Workspace> {
        store.hydrate().await;

        let users = store.get_users().await;
        let tasks = store.get_tasks().await;
        let projects = store.get_projects().await;
        let tables = normalize_tables(store.get_tables().await);
        let docs = store.get_docs().await;
        let folders = store.get_folders().await;
        let meetings = store.get_meetings().await;
        let activity = store.get_activity().await;
        let statuses = store.get_statuses().await;
        let priorities = store.get_priorities().await;

        let session_user = match store.get_scalar(ScalarKey::Session).await {
            Some(uid) => users.iter().find(|u| u.id == uid).cloned(),
            None => None,
        };
        if let Some(user) = &session_user {
            tracing::debug!("restored session for '{}'", user.login);
        }

        let mut workspace = Workspace {
            store,
            notifier,
            deliveries: JoinSet::new(),
            users,
            tasks,
            projects,
            tables,
            docs,
            folders,
            meetings,
            activity,
            statuses,
            priorities,
            session_user,
            active_table_id: None,
            filter: TaskFilter::default(),
        };

        // Land on the first task table, like the web client did.
        let initial = workspace
            .tables
            .iter()
            .find(|t| t.kind == TableKind::Tasks)
            .or_else(|| workspace.tables.first())
            .map(|t| t.id.clone());
        if let Some(id) = initial {
            workspace.select_table(&id);
        }

        Ok(workspace)
    }
}

/// Historical stores accumulated duplicate table rows; drop duplicates by id
/// and enforce exactly one backlog table (prefer the system one, reseed when
/// none survive).
fn normalize_tables(tables: Vec<Table>) -> Vec<Table> {
    let mut unique: Vec<Table> = Vec::with_capacity(tables.len());
    for table in tables {
        if !unique.iter().any(|t| t.id == table.id) {
            unique.push(table);
        }
    }

    let backlogs: Vec<&Table> = unique.iter().filter(|t| t.kind == TableKind::Backlog).collect();
    if backlogs.len() > 1 {
        let keep = backlogs
            .iter()
            .find(|t| t.is_system)
            .unwrap_or(&backlogs[0])
            .id
            .clone();
        unique.retain(|t| t.kind != TableKind::Backlog || t.id == keep);
    } else if backlogs.is_empty() {
        if let Some(seeded) = seed::default_tables()
            .into_iter()
            .find(|t| t.kind == TableKind::Backlog)
        {
            unique.push(seeded);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backlog(id: &str, is_system: bool) -> Table {
        Table {
            id: id.into(),
            name: "Backlog".into(),
            kind: TableKind::Backlog,
            icon: "layout".into(),
            color: None,
            is_system,
            view_config: None,
        }
    }

    #[test]
    fn duplicate_ids_are_dropped_keeping_first() {
        let tables = vec![backlog("b1", true), backlog("b1", false)];
        let normalized = normalize_tables(tables);
        assert_eq!(normalized.len(), 1);
        assert!(normalized[0].is_system);
    }

    #[test]
    fn extra_backlogs_collapse_to_the_system_one() {
        let normalized = normalize_tables(vec![backlog("b1", false), backlog("b2", true)]);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].id, "b2");
    }

    #[test]
    fn missing_backlog_is_reseeded() {
        let normalized = normalize_tables(vec![]);
        assert_eq!(
            normalized
                .iter()
                .filter(|t| t.kind == TableKind::Backlog)
                .count(),
            1
        );
    }
}
