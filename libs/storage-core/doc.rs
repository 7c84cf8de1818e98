use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Link,
    Internal,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc {
    pub id: String,
    pub table_id: String,
    /// Unset means the doc lives in the implicit "General" bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub table_id: String,
    pub name: String,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct DocPatch {
    pub folder_id: Option<Option<String>>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl DocPatch {
    pub fn apply(self, doc: &Doc) -> Doc {
        Doc {
            id: doc.id.clone(),
            table_id: doc.table_id.clone(),
            folder_id: self.folder_id.unwrap_or_else(|| doc.folder_id.clone()),
            title: self.title.unwrap_or_else(|| doc.title.clone()),
            kind: doc.kind,
            url: self.url.or_else(|| doc.url.clone()),
            content: self.content.unwrap_or_else(|| doc.content.clone()),
            tags: self.tags.unwrap_or_else(|| doc.tags.clone()),
        }
    }
}
