use crate::{util, Workspace};
use worklane_notify::status_change_message;
use worklane_storage_core::{
    Attachment, AttachmentKind, Comment, Doc, DocKind, TableKind, Task, TaskPatch,
};

/// Input for [`Workspace::create_task`]; unset fields get the controller
/// defaults (first status/priority option, today's dates, active table).
#[derive(Debug, Default, Clone)]
pub struct TaskDraft {
    pub table_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assignee_id: Option<String>,
    pub project_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AttachmentDraft {
    pub kind: AttachmentKind,
    pub name: String,
    pub url: Option<String>,
    pub doc_id: Option<String>,
}

impl Workspace {
    pub async fn create_task(&mut self, draft: TaskDraft) -> eyre::Result<Task> {
        let table_id = match draft.table_id.or_else(|| self.active_table_id.clone()) {
            Some(id) => id,
            None => self
                .tables
                .iter()
                .find(|t| t.kind == TableKind::Tasks)
                .map(|t| t.id.clone())
                .ok_or_else(|| eyre::eyre!("No task table to create the task in"))?,
        };
        let status = match draft.status {
            Some(s) => s,
            None => self
                .statuses
                .first()
                .map(|s| s.id.clone())
                .ok_or_else(|| eyre::eyre!("No status options configured"))?,
        };
        let priority = match draft.priority {
            Some(p) => p,
            None => self
                .priorities
                .first()
                .map(|p| p.id.clone())
                .ok_or_else(|| eyre::eyre!("No priority options configured"))?,
        };

        let today = util::today();
        let task = Task {
            id: util::new_id("task"),
            table_id,
            title: draft.title.unwrap_or_else(|| "New task".to_string()),
            status,
            priority,
            assignee_id: draft.assignee_id,
            project_id: draft.project_id,
            start_date: draft.start_date.unwrap_or_else(|| today.clone()),
            end_date: draft.end_date.unwrap_or(today),
            description: draft.description.unwrap_or_default(),
            is_archived: false,
            comments: vec![],
            attachments: vec![],
        };

        self.tasks.push(task.clone());
        self.store.set_tasks(&self.tasks).await?;
        self.log_activity("created task", &task.title).await?;
        Ok(task)
    }

    /// Shallow-merge update. A status change additionally lands in the
    /// activity feed and fires the chat notifier (fire-and-forget).
    pub async fn update_task(&mut self, task_id: &str, patch: TaskPatch) -> eyre::Result<Task> {
        let current = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        let updated = patch.apply(&current);
        let status_changed = updated.status != current.status;

        self.replace_task(updated.clone()).await?;

        if status_changed {
            let old_name = self.status_name(&current.status);
            let new_name = self.status_name(&updated.status);
            self.log_activity(
                "changed status",
                &format!("{}: {old_name} → {new_name}", updated.title),
            )
            .await?;
            self.notify_status_change(&updated.title, &old_name, &new_name);
        }
        Ok(updated)
    }

    pub async fn archive_task(&mut self, task_id: &str) -> eyre::Result<()> {
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        self.replace_task(TaskPatch::archived(true).apply(&task)).await?;
        self.log_activity("archived task", &task.title).await
    }

    pub async fn restore_task(&mut self, task_id: &str) -> eyre::Result<()> {
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        self.replace_task(TaskPatch::archived(false).apply(&task)).await?;
        self.log_activity("restored task", &task.title).await
    }

    /// Removes the task outright; archive is the recoverable path.
    pub async fn delete_task_permanent(&mut self, task_id: &str) -> eyre::Result<()> {
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        self.tasks.retain(|t| t.id != task_id);
        self.store.set_tasks(&self.tasks).await?;
        self.log_activity("deleted task", &task.title).await
    }

    pub async fn add_comment(&mut self, task_id: &str, text: &str) -> eyre::Result<Comment> {
        let user = self
            .session_user
            .clone()
            .ok_or_else(|| eyre::eyre!("Not signed in"))?;
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        let comment = Comment {
            id: util::new_id("cmt"),
            user_id: user.id,
            user_name: user.name,
            user_avatar: user.avatar.unwrap_or_default(),
            text: text.to_string(),
            created_at: util::now_iso(),
        };
        let mut comments = task.comments.clone();
        comments.push(comment.clone());
        let patch = TaskPatch {
            comments: Some(comments),
            ..Default::default()
        };
        self.replace_task(patch.apply(&task)).await?;
        self.log_activity("commented on", &task.title).await?;
        Ok(comment)
    }

    /// Attach a link/file/doc reference. Link attachments are also mirrored
    /// as a link doc in the first docs table, tagged `from-tasks`, so they
    /// show up in the docs view.
    pub async fn add_attachment(
        &mut self,
        task_id: &str,
        draft: AttachmentDraft,
    ) -> eyre::Result<Attachment> {
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;

        let mut attachment = Attachment {
            id: util::new_id("att"),
            kind: draft.kind,
            name: draft.name,
            url: draft.url,
            doc_id: draft.doc_id,
        };

        if attachment.kind == AttachmentKind::Link {
            if let Some(docs_table) = self.tables.iter().find(|t| t.kind == TableKind::Docs) {
                let doc = Doc {
                    id: util::new_id("doc"),
                    table_id: docs_table.id.clone(),
                    folder_id: None,
                    title: attachment.name.clone(),
                    kind: DocKind::Link,
                    url: attachment.url.clone(),
                    content: String::new(),
                    tags: vec!["from-tasks".to_string()],
                };
                attachment.doc_id = Some(doc.id.clone());
                self.docs.push(doc);
                self.store.set_docs(&self.docs).await?;
            }
        }

        let mut attachments = task.attachments.clone();
        attachments.push(attachment.clone());
        let patch = TaskPatch {
            attachments: Some(attachments),
            ..Default::default()
        };
        self.replace_task(patch.apply(&task)).await?;
        self.log_activity("attached to", &task.title).await?;
        Ok(attachment)
    }

    pub async fn remove_attachment(
        &mut self,
        task_id: &str,
        attachment_id: &str,
    ) -> eyre::Result<()> {
        let task = self
            .task_by_id(task_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Task '{task_id}' not found"))?;
        let attachments: Vec<Attachment> = task
            .attachments
            .iter()
            .filter(|a| a.id != attachment_id)
            .cloned()
            .collect();
        let patch = TaskPatch {
            attachments: Some(attachments),
            ..Default::default()
        };
        self.replace_task(patch.apply(&task)).await
    }

    /// Pull a backlog task into work: first tasks table, second status option
    /// (the first one past "not started").
    pub async fn take_to_work(&mut self, task_id: &str) -> eyre::Result<Task> {
        let table_id = self
            .tables
            .iter()
            .find(|t| t.kind == TableKind::Tasks)
            .map(|t| t.id.clone())
            .ok_or_else(|| eyre::eyre!("No task table to move the task into"))?;
        let status = self
            .statuses
            .get(1)
            .or_else(|| self.statuses.first())
            .map(|s| s.id.clone())
            .ok_or_else(|| eyre::eyre!("No status options configured"))?;
        let patch = TaskPatch {
            table_id: Some(table_id),
            status: Some(status),
            ..Default::default()
        };
        self.update_task(task_id, patch).await
    }

    pub(crate) async fn replace_task(&mut self, updated: Task) -> eyre::Result<()> {
        for task in self.tasks.iter_mut() {
            if task.id == updated.id {
                *task = updated.clone();
            }
        }
        self.store.set_tasks(&self.tasks).await
    }

    fn status_name(&self, status_id: &str) -> String {
        self.status_by_id(status_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| status_id.to_string())
    }

    fn notify_status_change(&mut self, title: &str, old_status: &str, new_status: &str) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };
        let by = self
            .session_user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "worklane".to_string());
        let message = status_change_message(title, old_status, new_status, &by);
        self.deliveries.spawn(async move {
            notifier.send(&message).await;
        });
    }
}
