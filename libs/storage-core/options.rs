use serde_derive::{Deserialize, Serialize};

/// A configurable task status label. Tasks reference the `id`; renaming an
/// option never touches the tasks pointing at it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOption {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Marks the terminal status that the hide-done filter masks.
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityOption {
    pub id: String,
    pub name: String,
    pub color: String,
}
