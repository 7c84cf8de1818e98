use clap::{Args, Subcommand};
use colored::Colorize;
use worklane_core::Workspace;
use worklane_storage_core::{DocKind, TableKind};

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Docs table to work in; defaults to the first one
    #[clap(short, long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Create a document
    Add {
        title: String,
        /// Make it a link doc pointing at this URL
        #[clap(long)]
        url: Option<String>,
        /// Put it inside a folder
        #[clap(long, value_name = "FOLDER_ID")]
        folder: Option<String>,
    },
    /// Delete a document
    Rm { doc_id: String },
    /// Create a folder
    Mkdir { name: String },
    /// Delete a folder; its docs fall back to the General group
    Rmdir { folder_id: String },
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    let table_id = match command.table {
        Some(id) => id,
        None => workspace
            .tables
            .iter()
            .find(|t| t.kind == TableKind::Docs)
            .map(|t| t.id.clone())
            .ok_or_else(|| eyre::eyre!("no docs table exists"))?,
    };

    match command.action {
        None => {
            for group in workspace.docs_by_folder(&table_id) {
                println!("\n{}", group.name.cyan().bold());
                for doc in group.docs {
                    let marker = match doc.kind {
                        DocKind::Link => "link",
                        DocKind::Internal => "page",
                    };
                    println!("  {} {} [{marker}]", doc.id.dimmed(), doc.title);
                }
            }
        }
        Some(Action::Add { title, url, folder }) => {
            let kind = if url.is_some() {
                DocKind::Link
            } else {
                DocKind::Internal
            };
            let doc = workspace
                .create_doc(&table_id, &title, kind, url, folder)
                .await?;
            LogBuilder::new(LogType::Success, format!("Created '{}'", doc.title))
                .with_branch("Id", doc.id)
                .print();
        }
        Some(Action::Rm { doc_id }) => {
            workspace.delete_doc(&doc_id).await?;
            LogBuilder::new(LogType::Warning, "Doc deleted")
                .with_branch("Id", doc_id)
                .print();
        }
        Some(Action::Mkdir { name }) => {
            let folder = workspace.create_folder(&table_id, &name).await?;
            LogBuilder::new(LogType::Success, format!("Created folder '{}'", folder.name))
                .with_branch("Id", folder.id)
                .print();
        }
        Some(Action::Rmdir { folder_id }) => {
            workspace.delete_folder(&folder_id).await?;
            LogBuilder::new(LogType::Warning, "Folder deleted")
                .with_branch("Id", folder_id)
                .print();
        }
    }
    Ok(())
}
