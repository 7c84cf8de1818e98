use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Archived task to bring back
    task_id: String,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    workspace.restore_task(&command.task_id).await?;
    LogBuilder::new(LogType::Success, "Restored")
        .with_branch("Id", command.task_id)
        .print();
    Ok(())
}
