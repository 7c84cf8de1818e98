use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task to archive
    task_id: String,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    workspace.archive_task(&command.task_id).await?;
    LogBuilder::new(LogType::Success, "Archived")
        .with_branch("Id", command.task_id)
        .print();
    Ok(())
}
