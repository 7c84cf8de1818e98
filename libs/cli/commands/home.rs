use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::utils::time;

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, workspace: &Workspace) -> eyre::Result<()> {
    let dashboard = workspace.home_dashboard();

    match dashboard.user_name {
        Some(name) => println!("{}", format!("{}, {name}", dashboard.greeting).bold()),
        None => println!("{} (not signed in)", dashboard.greeting.bold()),
    }

    println!("\n{}", "My open tasks".cyan().bold());
    if dashboard.my_tasks.is_empty() {
        println!("  nothing assigned to you");
    }
    for task in &dashboard.my_tasks {
        let status = workspace
            .status_by_id(&task.status)
            .map(|s| s.name.as_str())
            .unwrap_or("?");
        println!("  {} {} [{}]", task.id.dimmed(), task.title, status.blue());
    }

    println!("\n{}", "Recent activity".cyan().bold());
    for entry in &dashboard.recent_activity {
        println!(
            "  {} {} {} ({})",
            entry.user_name.bold(),
            entry.action,
            entry.details,
            time::humanize(&entry.timestamp).dimmed()
        );
    }
    Ok(())
}
