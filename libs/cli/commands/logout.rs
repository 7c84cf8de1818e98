use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    workspace.logout().await?;
    LogBuilder::new(LogType::Success, "Signed out").print();
    Ok(())
}
