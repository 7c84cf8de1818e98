use clap::Args;
use worklane_core::Workspace;
use worklane_storage_core::TaskPatch;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task to update
    task_id: String,

    #[clap(long)]
    title: Option<String>,

    /// Status option id; a change is logged and notified
    #[clap(long)]
    status: Option<String>,

    /// Priority option id
    #[clap(long)]
    priority: Option<String>,

    /// Move the task to another table
    #[clap(long)]
    table: Option<String>,

    /// Assignee user id
    #[clap(long, conflicts_with = "unassign")]
    assignee: Option<String>,

    /// Drop the assignee
    #[clap(long)]
    unassign: bool,

    /// Project id
    #[clap(long, conflicts_with = "no_project")]
    project: Option<String>,

    /// Drop the project reference
    #[clap(long)]
    no_project: bool,

    #[clap(long)]
    start: Option<String>,

    #[clap(long)]
    end: Option<String>,

    #[clap(short, long)]
    description: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    let assignee_id = if command.unassign {
        Some(None)
    } else {
        command.assignee.map(Some)
    };
    let project_id = if command.no_project {
        Some(None)
    } else {
        command.project.map(Some)
    };

    let patch = TaskPatch {
        table_id: command.table,
        title: command.title,
        status: command.status,
        priority: command.priority,
        assignee_id,
        project_id,
        start_date: command.start,
        end_date: command.end,
        description: command.description,
        ..Default::default()
    };

    let task = workspace.update_task(&command.task_id, patch).await?;
    LogBuilder::new(LogType::Success, format!("Updated '{}'", task.title))
        .with_branch("Id", task.id)
        .print();
    Ok(())
}
