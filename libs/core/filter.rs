use crate::Workspace;
use worklane_storage_core::Task;

/// Active task filters; empty strings mean "no constraint". All constraints
/// AND together.
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    /// Case-insensitive title substring.
    pub search: String,
    /// Status option id.
    pub status: String,
    /// Assignee user id.
    pub assignee: String,
    /// Project id.
    pub project: String,
    /// Mask tasks whose status option is flagged done.
    pub hide_done: bool,
}

impl Workspace {
    /// The task list every task view renders from. Archived tasks never pass;
    /// the remaining constraints AND together.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| {
                if t.is_archived {
                    return false;
                }
                if let Some(active) = self.active_table_id.as_deref() {
                    if t.table_id != active {
                        return false;
                    }
                }
                if self.filter.hide_done && self.status_is_done(&t.status) {
                    return false;
                }
                self.matches_filter(t)
            })
            .collect()
    }

    /// The search/status/assignee/project constraints alone; table scoping
    /// and the hide-done mask are up to the caller.
    pub(crate) fn matches_filter(&self, task: &Task) -> bool {
        let search = self.filter.search.to_lowercase();
        if !search.is_empty() && !task.title.to_lowercase().contains(&search) {
            return false;
        }
        if !self.filter.status.is_empty() && task.status != self.filter.status {
            return false;
        }
        if !self.filter.assignee.is_empty()
            && task.assignee_id.as_deref() != Some(self.filter.assignee.as_str())
        {
            return false;
        }
        if !self.filter.project.is_empty()
            && task.project_id.as_deref() != Some(self.filter.project.as_str())
        {
            return false;
        }
        true
    }

    pub(crate) fn status_is_done(&self, status_id: &str) -> bool {
        self.status_by_id(status_id).map(|s| s.is_done).unwrap_or(false)
    }
}
