use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Move this task to the first task table and start it
    #[clap(long, value_name = "TASK_ID")]
    take: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    if let Some(task_id) = command.take {
        let task = workspace.take_to_work(&task_id).await?;
        LogBuilder::new(LogType::Success, format!("Took '{}' into work", task.title))
            .with_branch("Table", task.table_id)
            .print();
        return Ok(());
    }

    let tasks = workspace.backlog_tasks();
    println!("{} ({} tasks)", "Backlog".cyan().bold(), tasks.len());
    for task in tasks {
        let priority = workspace
            .priority_by_id(&task.priority)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        println!("  {} {} [{}]", task.id.dimmed(), task.title, priority.yellow());
    }
    Ok(())
}
