use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Document to read or write
    doc_id: String,

    /// Replace the document body
    #[clap(long)]
    content: Option<String>,

    /// Rename the document while writing
    #[clap(long, requires = "content")]
    title: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    if let Some(content) = command.content {
        let current = workspace
            .docs
            .iter()
            .find(|d| d.id == command.doc_id)
            .ok_or_else(|| eyre::eyre!("Doc '{}' not found", command.doc_id))?;
        let title = command.title.unwrap_or_else(|| current.title.clone());
        let doc = workspace
            .save_doc_content(&command.doc_id, &title, &content)
            .await?;
        LogBuilder::new(LogType::Success, format!("Saved '{}'", doc.title))
            .with_branch("Id", doc.id)
            .print();
        return Ok(());
    }

    let doc = workspace
        .docs
        .iter()
        .find(|d| d.id == command.doc_id)
        .ok_or_else(|| eyre::eyre!("Doc '{}' not found", command.doc_id))?;
    println!("{}", doc.title.bold());
    if let Some(url) = &doc.url {
        println!("{}", url.underline());
    }
    if !doc.content.is_empty() {
        println!("\n{}", doc.content);
    }
    Ok(())
}
