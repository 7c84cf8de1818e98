use crate::{util, Workspace};
use worklane_storage_core::ActivityEntry;

impl Workspace {
    /// Record an action by the signed-in user; silently a no-op without a
    /// session, matching the historical client.
    pub async fn log_activity(&mut self, action: &str, details: &str) -> eyre::Result<()> {
        let Some(user) = &self.session_user else {
            return Ok(());
        };
        let entry = ActivityEntry {
            id: util::new_id("act"),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_avatar: user.avatar.clone().unwrap_or_default(),
            action: action.to_string(),
            details: details.to_string(),
            timestamp: util::now_iso(),
            read: false,
        };
        self.activity = self.store.add_activity(entry).await?;
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.activity.iter().filter(|a| !a.read).count()
    }

    pub async fn mark_all_read(&mut self) -> eyre::Result<()> {
        for entry in self.activity.iter_mut() {
            entry.read = true;
        }
        self.store.set_activity(&self.activity).await
    }
}
