use clap::{Args, Subcommand};
use colored::Colorize;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Add a status option
    AddStatus {
        name: String,
        #[clap(long)]
        color: Option<String>,
    },
    /// Rename or recolor a status option
    EditStatus {
        status_id: String,
        name: String,
        #[clap(long)]
        color: Option<String>,
    },
    /// Delete a status option; the last one cannot be removed
    RmStatus { status_id: String },
    /// Add a priority option
    AddPriority {
        name: String,
        #[clap(long)]
        color: Option<String>,
    },
    /// Rename or recolor a priority option
    EditPriority {
        priority_id: String,
        name: String,
        #[clap(long)]
        color: Option<String>,
    },
    /// Delete a priority option; the last one cannot be removed
    RmPriority { priority_id: String },
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    match command.action {
        None => {
            println!("{}", "Statuses".cyan().bold());
            for status in &workspace.statuses {
                let done = if status.is_done { " (done)" } else { "" };
                println!("  {} {}{done}", status.id.dimmed(), status.name);
            }
            println!("\n{}", "Priorities".cyan().bold());
            for priority in &workspace.priorities {
                println!("  {} {}", priority.id.dimmed(), priority.name);
            }
        }
        Some(Action::AddStatus { name, color }) => {
            let option = workspace
                .add_status_option(&name, color.as_deref().unwrap_or("gray"))
                .await?;
            LogBuilder::new(LogType::Success, format!("Added status '{}'", option.name))
                .with_branch("Id", option.id)
                .print();
        }
        Some(Action::EditStatus {
            status_id,
            name,
            color,
        }) => {
            let color = color.unwrap_or_else(|| {
                workspace
                    .status_by_id(&status_id)
                    .map(|s| s.color.clone())
                    .unwrap_or_else(|| "gray".to_string())
            });
            workspace.rename_status_option(&status_id, &name, &color).await?;
            LogBuilder::new(LogType::Success, "Status updated").print();
        }
        Some(Action::RmStatus { status_id }) => {
            workspace.delete_status_option(&status_id).await?;
            LogBuilder::new(LogType::Warning, "Status removed").print();
        }
        Some(Action::AddPriority { name, color }) => {
            let option = workspace
                .add_priority_option(&name, color.as_deref().unwrap_or("gray"))
                .await?;
            LogBuilder::new(LogType::Success, format!("Added priority '{}'", option.name))
                .with_branch("Id", option.id)
                .print();
        }
        Some(Action::EditPriority {
            priority_id,
            name,
            color,
        }) => {
            let color = color.unwrap_or_else(|| {
                workspace
                    .priority_by_id(&priority_id)
                    .map(|p| p.color.clone())
                    .unwrap_or_else(|| "gray".to_string())
            });
            workspace
                .rename_priority_option(&priority_id, &name, &color)
                .await?;
            LogBuilder::new(LogType::Success, "Priority updated").print();
        }
        Some(Action::RmPriority { priority_id }) => {
            workspace.delete_priority_option(&priority_id).await?;
            LogBuilder::new(LogType::Warning, "Priority removed").print();
        }
    }
    Ok(())
}
