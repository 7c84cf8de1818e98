use clap::Args;
use worklane_core::{AttachmentDraft, Workspace};
use worklane_storage_core::AttachmentKind;

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    /// Task to attach to
    task_id: String,

    /// Display name of the attachment
    name: Option<String>,

    /// Attach a link; it also shows up as a doc tagged `from-tasks`
    #[clap(long, conflicts_with = "doc")]
    url: Option<String>,

    /// Attach a reference to an existing doc
    #[clap(long, value_name = "DOC_ID")]
    doc: Option<String>,

    /// Remove an attachment instead of adding one
    #[clap(long, value_name = "ATTACHMENT_ID", conflicts_with_all = &["name", "url", "doc"])]
    remove: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    if let Some(attachment_id) = command.remove {
        workspace
            .remove_attachment(&command.task_id, &attachment_id)
            .await?;
        LogBuilder::new(LogType::Success, "Attachment removed")
            .with_branch("Id", attachment_id)
            .print();
        return Ok(());
    }

    let name = command
        .name
        .ok_or_else(|| eyre::eyre!("an attachment needs a name"))?;
    let kind = match (&command.url, &command.doc) {
        (Some(_), _) => AttachmentKind::Link,
        (None, Some(_)) => AttachmentKind::Doc,
        (None, None) => AttachmentKind::File,
    };
    let attachment = workspace
        .add_attachment(
            &command.task_id,
            AttachmentDraft {
                kind,
                name,
                url: command.url,
                doc_id: command.doc,
            },
        )
        .await?;

    LogBuilder::new(LogType::Success, format!("Attached '{}'", attachment.name))
        .with_branch("Id", attachment.id)
        .with_optional_branch("Doc", attachment.doc_id)
        .print();
    Ok(())
}
