use clap::Args;
use worklane_core::{LoginOutcome, Workspace};

use crate::utils::command_error::{self, Error};
use crate::utils::display::{LogBuilder, LogType};
use crate::utils::exit_code::ExitCode;

#[derive(Args, Debug)]
pub struct Command {
    /// Account login, matched case-insensitively
    login: String,

    /// Account password
    password: String,

    /// New password, required when the account is flagged for a first-login
    /// password change
    #[clap(long)]
    new_password: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> command_error::Result<()> {
    let outcome = workspace
        .login(&command.login, &command.password)
        .await
        .map_err(|err| Error::ExitWithError(ExitCode::NoUser, err))?;

    let user = match outcome {
        LoginOutcome::LoggedIn(user) => user,
        LoginOutcome::PasswordChangeRequired => {
            let Some(new_password) = command.new_password else {
                return Err(Error::ExitWithError(
                    ExitCode::Usage,
                    eyre::eyre!(
                        "This account must set a new password first; rerun with --new-password"
                    ),
                ));
            };
            workspace
                .complete_password_change(&command.login, &command.password, &new_password)
                .await?
        }
    };

    LogBuilder::new(LogType::Success, format!("Signed in as {}", user.name))
        .with_branch("Login", user.login)
        .with_branch("Role", format!("{:?}", user.role))
        .print();
    Ok(())
}
