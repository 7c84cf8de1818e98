use serde_derive::{Deserialize, Serialize};

pub type TaskId = String;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Link,
    File,
    Doc,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

/// A task row. `status` and `priority` hold ids into the configurable
/// status/priority option tables, not display names.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub table_id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub assignee_id: Option<String>,
    pub project_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Partial update of a [`Task`]; `None` fields keep the current value.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct TaskPatch {
    pub table_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee_id: Option<Option<String>>,
    pub project_id: Option<Option<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub is_archived: Option<bool>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

impl TaskPatch {
    pub fn apply(self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            table_id: self.table_id.unwrap_or_else(|| task.table_id.clone()),
            title: self.title.unwrap_or_else(|| task.title.clone()),
            status: self.status.unwrap_or_else(|| task.status.clone()),
            priority: self.priority.unwrap_or_else(|| task.priority.clone()),
            assignee_id: self.assignee_id.unwrap_or_else(|| task.assignee_id.clone()),
            project_id: self.project_id.unwrap_or_else(|| task.project_id.clone()),
            start_date: self.start_date.unwrap_or_else(|| task.start_date.clone()),
            end_date: self.end_date.unwrap_or_else(|| task.end_date.clone()),
            description: self.description.unwrap_or_else(|| task.description.clone()),
            is_archived: self.is_archived.unwrap_or(task.is_archived),
            comments: self.comments.unwrap_or_else(|| task.comments.clone()),
            attachments: self.attachments.unwrap_or_else(|| task.attachments.clone()),
        }
    }

    pub fn archived(flag: bool) -> Self {
        TaskPatch {
            is_archived: Some(flag),
            ..Default::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        TaskPatch {
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "task-1".into(),
            table_id: "t1".into(),
            title: "Fix login".into(),
            status: "s1".into(),
            priority: "p1".into(),
            assignee_id: Some("u1".into()),
            project_id: None,
            start_date: "2026-01-05".into(),
            end_date: "2026-01-08".into(),
            description: "".into(),
            is_archived: false,
            comments: vec![],
            attachments: vec![],
        }
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let task = sample_task();
        let updated = TaskPatch::status("s2").apply(&task);
        assert_eq!(updated.status, "s2");
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.assignee_id, task.assignee_id);
    }

    #[test]
    fn patch_can_clear_optional_reference() {
        let task = sample_task();
        let patch = TaskPatch {
            assignee_id: Some(None),
            ..Default::default()
        };
        assert_eq!(patch.apply(&task).assignee_id, None);
    }

    #[test]
    fn archive_flag_round_trips() {
        let task = sample_task();
        let archived = TaskPatch::archived(true).apply(&task);
        assert!(archived.is_archived);
        let restored = TaskPatch::archived(false).apply(&archived);
        assert_eq!(restored, task);
    }
}
