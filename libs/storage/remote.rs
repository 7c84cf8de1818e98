use reqwest::Client;
use serde_derive::Deserialize;
use std::time::Duration;
use worklane_storage_core::{
    ActivityEntry, Doc, Folder, Meeting, PriorityOption, Project, StatusOption, Table, Task, User,
};

/// Full remote document, as returned by `GET {base}/.json`. Collections the
/// remote does not know about stay `None` and leave local state untouched.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    pub users: Option<Vec<User>>,
    pub tasks: Option<Vec<Task>>,
    pub projects: Option<Vec<Project>>,
    pub tables: Option<Vec<Table>>,
    pub docs: Option<Vec<Doc>>,
    pub folders: Option<Vec<Folder>>,
    pub meetings: Option<Vec<Meeting>>,
    pub activity: Option<Vec<ActivityEntry>>,
    pub statuses: Option<Vec<StatusOption>>,
    pub priorities: Option<Vec<PriorityOption>>,
}

/// Client for the remote JSON document store. Reads hydrate the whole
/// document once at startup; writes replace one collection at a time.
#[derive(Clone)]
pub struct RemoteMirror {
    client: Client,
    base_url: String,
}

impl RemoteMirror {
    pub fn new(base_url: &str) -> eyre::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| eyre::eyre!("failed to build HTTP client: {e}"))?;
        Ok(RemoteMirror {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn document_url(&self) -> String {
        format!("{}/.json", self.base_url)
    }

    pub fn collection_url(&self, key: &str) -> String {
        format!("{}/{key}.json", self.base_url)
    }

    pub async fn fetch_snapshot(&self) -> eyre::Result<Snapshot> {
        let res = self.client.get(self.document_url()).send().await?;
        if !res.status().is_success() {
            return Err(eyre::eyre!("remote store returned {}", res.status()));
        }
        // The remote answers `null` for a never-written document.
        let snapshot: Option<Snapshot> = res.json().await?;
        Ok(snapshot.unwrap_or_default())
    }

    /// Replace one collection wholesale. `payload` is the already-serialized
    /// JSON array for that collection.
    pub async fn push(&self, key: &str, payload: String) -> eyre::Result<()> {
        let res = self
            .client
            .put(self.collection_url(key))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(eyre::eyre!(
                "remote store rejected write to '{key}': {}",
                res.status()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_normalize_trailing_slash() -> eyre::Result<()> {
        let mirror = RemoteMirror::new("https://db.example.net/app/")?;
        assert_eq!(mirror.document_url(), "https://db.example.net/app/.json");
        assert_eq!(
            mirror.collection_url("tasks"),
            "https://db.example.net/app/tasks.json"
        );
        Ok(())
    }

    #[test]
    fn snapshot_ignores_unknown_fields_and_defaults_missing() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"tasks": [], "whatever": 3}"#).unwrap();
        assert!(snapshot.tasks.is_some());
        assert!(snapshot.users.is_none());
    }
}
