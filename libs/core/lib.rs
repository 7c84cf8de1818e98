use tokio::task::JoinSet;
use worklane_notify::Notifier;
use worklane_storage::StoreAdapter;
use worklane_storage_core::{
    ActivityEntry, Doc, Folder, Meeting, PriorityOption, Project, StatusOption, Table, Task, User,
};

pub mod filter;
mod load;
pub mod util;
pub mod views;

mod activity;
mod docs;
mod meetings;
mod session;
mod tables;
mod tasks;

#[cfg(test)]
mod workspace_tests;

pub use docs::{DocGroup, UNCATEGORIZED_GROUP};
pub use filter::TaskFilter;
pub use load::{load, load_with_backend};
pub use session::{LoginOutcome, RESET_PASSWORD};
pub use tasks::{AttachmentDraft, TaskDraft};

/// The whole application state: every collection in memory, the persistence
/// adapter behind it, and the navigation/filter state the views consume.
/// Mutations update memory synchronously, persist locally, and never wait on
/// the remote mirror or the notification gateway.
pub struct Workspace {
    pub(crate) store: StoreAdapter,
    pub(crate) notifier: Option<Notifier>,
    pub(crate) deliveries: JoinSet<()>,

    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub tables: Vec<Table>,
    pub docs: Vec<Doc>,
    pub folders: Vec<Folder>,
    pub meetings: Vec<Meeting>,
    pub activity: Vec<ActivityEntry>,
    pub statuses: Vec<StatusOption>,
    pub priorities: Vec<PriorityOption>,

    pub session_user: Option<User>,
    pub active_table_id: Option<String>,
    pub filter: TaskFilter,
}

impl Workspace {
    pub fn active_table(&self) -> Option<&Table> {
        let id = self.active_table_id.as_deref()?;
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn status_by_id(&self, id: &str) -> Option<&StatusOption> {
        self.statuses.iter().find(|s| s.id == id)
    }

    pub fn priority_by_id(&self, id: &str) -> Option<&PriorityOption> {
        self.priorities.iter().find(|p| p.id == id)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Re-persist every collection, queueing a full copy for the remote
    /// mirror.
    pub async fn push_all(&mut self) -> eyre::Result<()> {
        self.store.set_users(&self.users).await?;
        self.store.set_tasks(&self.tasks).await?;
        self.store.set_projects(&self.projects).await?;
        self.store.set_tables(&self.tables).await?;
        self.store.set_docs(&self.docs).await?;
        self.store.set_folders(&self.folders).await?;
        self.store.set_meetings(&self.meetings).await?;
        self.store.set_activity(&self.activity).await?;
        self.store.set_statuses(&self.statuses).await?;
        self.store.set_priorities(&self.priorities).await?;
        Ok(())
    }

    /// Wait for in-flight deliveries and mirror pushes, then release the
    /// store. Call once before process exit.
    pub async fn shutdown(mut self) {
        while self.deliveries.join_next().await.is_some() {}
        self.store.shutdown().await;
    }
}
