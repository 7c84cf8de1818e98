use clap::Args;
use worklane_core::{TaskDraft, Workspace};

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task title
    title: Option<String>,

    /// Table to create the task in; defaults to the active table
    #[clap(short, long)]
    table: Option<String>,

    /// Status option id; defaults to the first option
    #[clap(long)]
    status: Option<String>,

    /// Priority option id; defaults to the first option
    #[clap(long)]
    priority: Option<String>,

    /// Assignee user id
    #[clap(long)]
    assignee: Option<String>,

    /// Project id
    #[clap(long)]
    project: Option<String>,

    /// Start date, YYYY-MM-DD; defaults to today
    #[clap(long)]
    start: Option<String>,

    /// End date, YYYY-MM-DD; defaults to today
    #[clap(long)]
    end: Option<String>,

    /// Free-form description
    #[clap(short, long)]
    description: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    let task = workspace
        .create_task(TaskDraft {
            table_id: command.table,
            title: command.title,
            status: command.status,
            priority: command.priority,
            assignee_id: command.assignee,
            project_id: command.project,
            start_date: command.start,
            end_date: command.end,
            description: command.description,
        })
        .await?;

    let status = workspace
        .status_by_id(&task.status)
        .map(|s| s.name.clone());
    let links = worklane_core::util::extract_links(&task.description);
    let links = (!links.is_empty()).then(|| links.join(" "));
    LogBuilder::new(LogType::Success, format!("Created '{}'", task.title))
        .with_branch("Id", task.id.clone())
        .with_branch("Table", task.table_id.clone())
        .with_optional_branch("Status", status)
        .with_branch("Dates", format!("{} to {}", task.start_date, task.end_date))
        .with_optional_branch("Links", links)
        .print();
    Ok(())
}
