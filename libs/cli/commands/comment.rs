use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task to comment on
    task_id: String,

    /// Comment text
    text: String,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    let comment = workspace.add_comment(&command.task_id, &command.text).await?;
    LogBuilder::new(LogType::Success, "Comment added")
        .with_branch("By", comment.user_name)
        .with_branch("At", comment.created_at)
        .print();
    Ok(())
}
