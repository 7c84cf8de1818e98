use clap::Args;
use prettytable::{format, row, Table};
use worklane_core::Workspace;

/// Table selection and task filters shared by the task views.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Table to show; defaults to the first task table
    #[clap(short, long)]
    table: Option<String>,

    /// Case-insensitive title search
    #[clap(short, long)]
    search: Option<String>,

    /// Only tasks with this status option id
    #[clap(long)]
    status: Option<String>,

    /// Only tasks assigned to this user id
    #[clap(long)]
    assignee: Option<String>,

    /// Only tasks of this project id
    #[clap(long)]
    project: Option<String>,

    /// Include tasks whose status is flagged done
    #[clap(long)]
    all: bool,
}

impl FilterArgs {
    pub fn apply(self, workspace: &mut Workspace) {
        if let Some(table) = &self.table {
            workspace.select_table(table);
        }
        workspace.filter.search = self.search.unwrap_or_default();
        workspace.filter.status = self.status.unwrap_or_default();
        workspace.filter.assignee = self.assignee.unwrap_or_default();
        workspace.filter.project = self.project.unwrap_or_default();
        if self.all {
            workspace.filter.hide_done = false;
        }
    }
}

#[derive(Args, Debug)]
pub struct Command {
    #[clap(flatten)]
    filter: FilterArgs,

    /// Output the rows as JSON instead of a grid
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    command.filter.apply(workspace);
    let tasks = workspace.filtered_tasks();

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let mut grid = Table::new();
    grid.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    grid.set_titles(row![
        "Id", "Title", "Status", "Priority", "Assignee", "Project", "Start", "End"
    ]);
    for task in tasks {
        let status = workspace
            .status_by_id(&task.status)
            .map(|s| s.name.as_str())
            .unwrap_or(task.status.as_str());
        let priority = workspace
            .priority_by_id(&task.priority)
            .map(|p| p.name.as_str())
            .unwrap_or(task.priority.as_str());
        let assignee = task
            .assignee_id
            .as_deref()
            .and_then(|id| workspace.user_by_id(id))
            .map(|u| u.name.as_str())
            .unwrap_or("-");
        let project = task
            .project_id
            .as_deref()
            .and_then(|id| workspace.project_by_id(id))
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        grid.add_row(row![
            task.id,
            task.title,
            status,
            priority,
            assignee,
            project,
            task.start_date,
            task.end_date
        ]);
    }
    grid.printstd();
    Ok(())
}
