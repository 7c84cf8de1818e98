use clap::Args;
use colored::Colorize;
use worklane_core::{Workspace, RESET_PASSWORD};
use worklane_storage_core::{Role, UserPatch};

use crate::utils::display::{LogBuilder, LogType};

#[derive(Args, Debug)]
pub struct Command {
    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    email: Option<String>,

    #[clap(long)]
    phone: Option<String>,

    #[clap(long)]
    telegram: Option<String>,

    #[clap(long)]
    password: Option<String>,

    /// Admin only: reset this user's password to the temporary one
    #[clap(long, value_name = "USER_ID")]
    reset_password: Option<String>,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    if let Some(user_id) = command.reset_password {
        let admin = workspace
            .session_user
            .as_ref()
            .ok_or_else(|| eyre::eyre!("Not signed in"))?;
        if admin.role != Role::Admin {
            return Err(eyre::eyre!("Only an admin can reset passwords"));
        }
        workspace.reset_password(&user_id).await?;
        LogBuilder::new(LogType::Success, "Password reset")
            .with_branch("User", user_id)
            .with_branch("Temporary", RESET_PASSWORD)
            .print();
        return Ok(());
    }

    let patch = UserPatch {
        name: command.name,
        email: command.email,
        phone: command.phone,
        telegram: command.telegram,
        password: command.password,
        ..Default::default()
    };
    let is_noop = patch.name.is_none()
        && patch.email.is_none()
        && patch.phone.is_none()
        && patch.telegram.is_none()
        && patch.password.is_none();

    if is_noop {
        let user = workspace
            .session_user
            .as_ref()
            .ok_or_else(|| eyre::eyre!("Not signed in"))?;
        println!("{} ({:?})", user.name.bold(), user.role);
        println!("login:    {}", user.login);
        if let Some(email) = &user.email {
            println!("email:    {email}");
        }
        if let Some(phone) = &user.phone {
            println!("phone:    {phone}");
        }
        if let Some(telegram) = &user.telegram {
            println!("telegram: {telegram}");
        }
        return Ok(());
    }

    let user = workspace.update_profile(patch).await?;
    LogBuilder::new(LogType::Success, format!("Profile updated for {}", user.name)).print();
    Ok(())
}
