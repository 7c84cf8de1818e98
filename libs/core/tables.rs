use crate::{util, Workspace};
use worklane_storage_core::{
    PriorityOption, Project, StatusOption, Table, TableKind, TablePatch, ViewConfig,
};

impl Workspace {
    /// Make a table the active one. Task tables start with done tasks hidden;
    /// every other kind shows everything.
    pub fn select_table(&mut self, table_id: &str) {
        let kind = self.tables.iter().find(|t| t.id == table_id).map(|t| t.kind);
        self.active_table_id = Some(table_id.to_string());
        self.filter.hide_done = kind == Some(TableKind::Tasks);
    }

    pub fn clear_active_table(&mut self) {
        self.active_table_id = None;
        self.filter.hide_done = false;
    }

    pub async fn create_table(
        &mut self,
        name: &str,
        kind: TableKind,
        icon: &str,
    ) -> eyre::Result<Table> {
        let view_config = match kind {
            TableKind::Tasks | TableKind::Backlog => Some(ViewConfig::default()),
            TableKind::Docs | TableKind::Meetings => None,
        };
        let table = Table {
            id: util::new_id("tbl"),
            name: name.to_string(),
            kind,
            icon: icon.to_string(),
            color: None,
            is_system: false,
            view_config,
        };
        self.tables.push(table.clone());
        self.store.set_tables(&self.tables).await?;
        self.log_activity("created table", name).await?;
        Ok(table)
    }

    pub async fn update_table(&mut self, table_id: &str, patch: TablePatch) -> eyre::Result<Table> {
        let current = self
            .tables
            .iter()
            .find(|t| t.id == table_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Table '{table_id}' not found"))?;
        let updated = patch.apply(&current);
        for table in self.tables.iter_mut() {
            if table.id == table_id {
                *table = updated.clone();
            }
        }
        self.store.set_tables(&self.tables).await?;
        Ok(updated)
    }

    /// Irreversible; tasks pointing at the table are left behind as orphans.
    pub async fn delete_table(&mut self, table_id: &str) -> eyre::Result<()> {
        let table = self
            .tables
            .iter()
            .find(|t| t.id == table_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Table '{table_id}' not found"))?;
        self.tables.retain(|t| t.id != table_id);
        self.store.set_tables(&self.tables).await?;
        if self.active_table_id.as_deref() == Some(table_id) {
            self.clear_active_table();
        }
        self.log_activity("deleted table", &table.name).await
    }

    pub async fn add_status_option(&mut self, name: &str, color: &str) -> eyre::Result<StatusOption> {
        let option = StatusOption {
            id: util::new_id("st"),
            name: name.to_string(),
            color: color.to_string(),
            is_done: false,
        };
        self.statuses.push(option.clone());
        self.store.set_statuses(&self.statuses).await?;
        Ok(option)
    }

    pub async fn rename_status_option(
        &mut self,
        status_id: &str,
        name: &str,
        color: &str,
    ) -> eyre::Result<()> {
        let option = self
            .statuses
            .iter_mut()
            .find(|s| s.id == status_id)
            .ok_or_else(|| eyre::eyre!("Status option '{status_id}' not found"))?;
        option.name = name.to_string();
        option.color = color.to_string();
        self.store.set_statuses(&self.statuses).await
    }

    /// Removing the last remaining status is rejected; the collection stays
    /// as it was.
    pub async fn delete_status_option(&mut self, status_id: &str) -> eyre::Result<()> {
        if self.statuses.len() <= 1 {
            return Err(eyre::eyre!("Cannot delete the last status option"));
        }
        if !self.statuses.iter().any(|s| s.id == status_id) {
            return Err(eyre::eyre!("Status option '{status_id}' not found"));
        }
        self.statuses.retain(|s| s.id != status_id);
        self.store.set_statuses(&self.statuses).await
    }

    pub async fn add_priority_option(
        &mut self,
        name: &str,
        color: &str,
    ) -> eyre::Result<PriorityOption> {
        let option = PriorityOption {
            id: util::new_id("pr"),
            name: name.to_string(),
            color: color.to_string(),
        };
        self.priorities.push(option.clone());
        self.store.set_priorities(&self.priorities).await?;
        Ok(option)
    }

    pub async fn rename_priority_option(
        &mut self,
        priority_id: &str,
        name: &str,
        color: &str,
    ) -> eyre::Result<()> {
        let option = self
            .priorities
            .iter_mut()
            .find(|p| p.id == priority_id)
            .ok_or_else(|| eyre::eyre!("Priority option '{priority_id}' not found"))?;
        option.name = name.to_string();
        option.color = color.to_string();
        self.store.set_priorities(&self.priorities).await
    }

    pub async fn delete_priority_option(&mut self, priority_id: &str) -> eyre::Result<()> {
        if self.priorities.len() <= 1 {
            return Err(eyre::eyre!("Cannot delete the last priority option"));
        }
        if !self.priorities.iter().any(|p| p.id == priority_id) {
            return Err(eyre::eyre!("Priority option '{priority_id}' not found"));
        }
        self.priorities.retain(|p| p.id != priority_id);
        self.store.set_priorities(&self.priorities).await
    }

    pub async fn create_project(&mut self, name: &str, icon: &str) -> eyre::Result<Project> {
        let project = Project {
            id: util::new_id("prj"),
            name: name.to_string(),
            icon: Some(icon.to_string()),
            color: None,
        };
        self.projects.push(project.clone());
        self.store.set_projects(&self.projects).await?;
        Ok(project)
    }

    /// Deleting a project leaves `project_id` references dangling; tasks stay
    /// visible and editable.
    pub async fn delete_project(&mut self, project_id: &str) -> eyre::Result<()> {
        if !self.projects.iter().any(|p| p.id == project_id) {
            return Err(eyre::eyre!("Project '{project_id}' not found"));
        }
        self.projects.retain(|p| p.id != project_id);
        self.store.set_projects(&self.projects).await
    }
}
