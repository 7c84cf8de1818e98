use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::commands::list::FilterArgs;

#[derive(Args, Debug)]
pub struct Command {
    #[clap(flatten)]
    filter: FilterArgs,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    command.filter.apply(workspace);

    for column in workspace.kanban_columns() {
        println!(
            "\n{} ({})",
            column.status.name.to_uppercase().bold(),
            column.tasks.len()
        );
        if column.tasks.is_empty() {
            println!("  {}", "empty".dimmed());
        }
        for task in column.tasks {
            let assignee = task
                .assignee_id
                .as_deref()
                .and_then(|id| workspace.user_by_id(id))
                .map(|u| u.name.as_str())
                .unwrap_or("unassigned");
            println!("  {} {} · {}", task.id.dimmed(), task.title, assignee.cyan());
        }
    }
    Ok(())
}
