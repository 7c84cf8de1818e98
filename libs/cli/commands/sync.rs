use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    // Startup already hydrated from the remote; this re-persists everything,
    // queueing a full copy for the mirror. Pushes drain on shutdown.
    workspace.push_all().await?;
    LogBuilder::new(LogType::Success, "Full push queued").print();
    Ok(())
}
