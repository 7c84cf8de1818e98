//! HTML message bodies for the chat webhook.

pub fn status_change_message(
    task_title: &str,
    old_status: &str,
    new_status: &str,
    user: &str,
) -> String {
    format!(
        "🔔 <b>Status update</b>\n\n\
         👤 <b>By:</b> {user}\n\
         📝 <b>Task:</b> {task_title}\n\
         🔄 <b>Status:</b> {old_status} ➡️ {new_status}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_change_mentions_both_statuses() {
        let msg = status_change_message("Fix login", "In progress", "Done", "Ilya");
        assert!(msg.contains("In progress ➡️ Done"));
        assert!(msg.contains("Fix login"));
        assert!(msg.contains("Ilya"));
    }

    #[test]
    fn status_change_is_html() {
        let msg = status_change_message("Fix login", "s1", "s2", "Ana");
        assert!(msg.starts_with("🔔 <b>Status update</b>"));
    }
}
