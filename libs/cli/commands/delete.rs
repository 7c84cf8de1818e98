use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task to remove for good; `archive` is the recoverable path
    task_id: String,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    workspace.delete_task_permanent(&command.task_id).await?;
    LogBuilder::new(LogType::Warning, "Deleted permanently")
        .with_branch("Id", command.task_id)
        .print();
    Ok(())
}
