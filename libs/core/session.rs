use crate::Workspace;
use worklane_storage_core::{ScalarKey, User, UserPatch};

/// Password handed out by an admin reset; the user must replace it on the
/// next login.
pub const RESET_PASSWORD: &str = "123456";

#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(User),
    /// Credentials matched but the account is flagged for a forced password
    /// change; no session is established yet.
    PasswordChangeRequired,
}

impl Workspace {
    /// Plaintext credential check; the login is compared case-insensitively.
    pub async fn login(&mut self, login: &str, password: &str) -> eyre::Result<LoginOutcome> {
        let user = self
            .users
            .iter()
            .find(|u| {
                u.login.eq_ignore_ascii_case(login)
                    && u.password.as_deref() == Some(password)
            })
            .cloned()
            .ok_or_else(|| eyre::eyre!("Invalid login or password"))?;

        if user.must_change_password {
            return Ok(LoginOutcome::PasswordChangeRequired);
        }

        self.store.set_scalar(ScalarKey::Session, &user.id).await?;
        self.session_user = Some(user.clone());
        Ok(LoginOutcome::LoggedIn(user))
    }

    /// Completes a first login: checks the current credentials again, replaces
    /// the password, clears the forced-change flag and establishes the session.
    pub async fn complete_password_change(
        &mut self,
        login: &str,
        password: &str,
        new_password: &str,
    ) -> eyre::Result<User> {
        let user = self
            .users
            .iter()
            .find(|u| {
                u.login.eq_ignore_ascii_case(login)
                    && u.password.as_deref() == Some(password)
            })
            .cloned()
            .ok_or_else(|| eyre::eyre!("Invalid login or password"))?;

        let updated = UserPatch {
            password: Some(new_password.to_string()),
            must_change_password: Some(false),
            ..Default::default()
        }
        .apply(&user);

        self.replace_user(updated.clone()).await?;
        self.store.set_scalar(ScalarKey::Session, &updated.id).await?;
        self.session_user = Some(updated.clone());
        Ok(updated)
    }

    pub async fn logout(&mut self) -> eyre::Result<()> {
        self.session_user = None;
        self.store.clear_scalar(ScalarKey::Session).await?;
        Ok(())
    }

    /// Update the signed-in user's profile.
    pub async fn update_profile(&mut self, patch: UserPatch) -> eyre::Result<User> {
        let current = self
            .session_user
            .clone()
            .ok_or_else(|| eyre::eyre!("Not signed in"))?;
        let updated = patch.apply(&current);
        self.replace_user(updated.clone()).await?;
        self.session_user = Some(updated.clone());
        Ok(updated)
    }

    /// Admin password reset: the account gets [`RESET_PASSWORD`] and is forced
    /// to change it on the next login.
    pub async fn reset_password(&mut self, user_id: &str) -> eyre::Result<()> {
        let user = self
            .user_by_id(user_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("User not found"))?;
        let updated = UserPatch {
            password: Some(RESET_PASSWORD.to_string()),
            must_change_password: Some(true),
            ..Default::default()
        }
        .apply(&user);
        self.replace_user(updated).await?;
        Ok(())
    }

    async fn replace_user(&mut self, updated: User) -> eyre::Result<()> {
        for user in self.users.iter_mut() {
            if user.id == updated.id {
                *user = updated.clone();
            }
        }
        self.store.set_users(&self.users).await
    }

    /// Cheap theme preference, persisted locally only.
    pub async fn set_theme(&mut self, theme: &str) -> eyre::Result<()> {
        self.store.set_scalar(ScalarKey::Theme, theme).await
    }

    pub async fn theme(&self) -> String {
        self.store
            .get_scalar(ScalarKey::Theme)
            .await
            .unwrap_or_else(|| "light".to_string())
    }
}
