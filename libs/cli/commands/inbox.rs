use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::utils::time;

#[derive(Args, Debug)]
pub struct Command {
    /// Mark every entry as read
    #[clap(long)]
    read: bool,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    println!(
        "{} ({} unread)",
        "Inbox".cyan().bold(),
        workspace.unread_count()
    );

    for entry in &workspace.activity {
        let marker = if entry.read { " " } else { "●" };
        println!(
            "{} {} {} {} ({})",
            marker.yellow(),
            entry.user_name.bold(),
            entry.action,
            entry.details,
            time::humanize(&entry.timestamp).dimmed()
        );
    }

    if command.read {
        workspace.mark_all_read().await?;
        println!("\nall entries marked read");
    }
    Ok(())
}
