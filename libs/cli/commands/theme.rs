use clap::Args;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// "light" or "dark"; omit to print the current theme
    theme: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    match command.theme {
        Some(theme) => {
            if theme != "light" && theme != "dark" {
                return Err(eyre::eyre!("unknown theme '{theme}'"));
            }
            workspace.set_theme(&theme).await?;
            LogBuilder::new(LogType::Success, format!("Theme set to {theme}")).print();
        }
        None => println!("{}", workspace.theme().await),
    }
    Ok(())
}
