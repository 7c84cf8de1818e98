use serde_derive::{Deserialize, Serialize};

/// One line of the activity feed shown in the inbox.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: String,
    pub action: String,
    pub details: String,
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}
