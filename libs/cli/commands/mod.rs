use clap::Subcommand;
use worklane_config::Config;

use crate::utils::command_error;

pub mod add;
pub mod archive;
pub mod attach;
pub mod backlog;
pub mod board;
pub mod comment;
pub mod delete;
pub mod docs;
pub mod edit;
pub mod gantt;
pub mod home;
pub mod inbox;
pub mod list;
pub mod login;
pub mod logout;
pub mod meet;
pub mod option;
pub mod page;
pub mod profile;
pub mod restore;
pub mod sync;
pub mod theme;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in with a login and password
    Login(login::Command),
    /// Sign out and drop the saved session
    Logout(logout::Command),
    /// Greeting, your open tasks and recent activity
    Home(home::Command),
    /// The activity feed, with unread markers
    Inbox(inbox::Command),
    /// Tasks of a table as a grid
    List(list::Command),
    /// Tasks of a table as kanban columns
    Board(board::Command),
    /// Tasks of a table as a gantt chart
    Gantt(gantt::Command),
    /// The backlog, with a way to pull a task into work
    Backlog(backlog::Command),
    /// Create a task
    Add(add::Command),
    /// Update fields of a task
    Edit(edit::Command),
    /// Archive a task (recoverable)
    Archive(archive::Command),
    /// Bring an archived task back
    Restore(restore::Command),
    /// Remove a task permanently
    Delete(delete::Command),
    /// Comment on a task
    Comment(comment::Command),
    /// Attach a link or file reference to a task
    Attach(attach::Command),
    /// Folders and documents of a docs table
    Docs(docs::Command),
    /// Read or write one document
    Page(page::Command),
    /// Meetings: list, schedule, month calendar
    Meet(meet::Command),
    /// Manage status and priority options
    Option(option::Command),
    /// Push every collection to the remote mirror
    Sync(sync::Command),
    /// Show or set the color theme
    Theme(theme::Command),
    /// Show or edit your profile; admins can reset passwords
    Profile(profile::Command),
}

impl Command {
    pub async fn execute(self, config: &Config) -> command_error::Result<()> {
        let mut workspace = worklane_core::load(config).await?;

        match self {
            Self::Login(o) => login::handle(o, &mut workspace).await?,
            Self::Logout(o) => logout::handle(o, &mut workspace).await?,
            Self::Home(o) => home::handle(o, &workspace).await?,
            Self::Inbox(o) => inbox::handle(o, &mut workspace).await?,
            Self::List(o) => list::handle(o, &mut workspace).await?,
            Self::Board(o) => board::handle(o, &mut workspace).await?,
            Self::Gantt(o) => gantt::handle(o, &mut workspace).await?,
            Self::Backlog(o) => backlog::handle(o, &mut workspace).await?,
            Self::Add(o) => add::handle(o, &mut workspace).await?,
            Self::Edit(o) => edit::handle(o, &mut workspace).await?,
            Self::Archive(o) => archive::handle(o, &mut workspace).await?,
            Self::Restore(o) => restore::handle(o, &mut workspace).await?,
            Self::Delete(o) => delete::handle(o, &mut workspace).await?,
            Self::Comment(o) => comment::handle(o, &mut workspace).await?,
            Self::Attach(o) => attach::handle(o, &mut workspace).await?,
            Self::Docs(o) => docs::handle(o, &mut workspace).await?,
            Self::Page(o) => page::handle(o, &mut workspace).await?,
            Self::Meet(o) => meet::handle(o, &mut workspace).await?,
            Self::Option(o) => option::handle(o, &mut workspace).await?,
            Self::Sync(o) => sync::handle(o, &mut workspace).await?,
            Self::Theme(o) => theme::handle(o, &mut workspace).await?,
            Self::Profile(o) => profile::handle(o, &mut workspace).await?,
        };

        // Flush outstanding mirror pushes and notifications before exit.
        workspace.shutdown().await;
        Ok(())
    }
}
