use crate::{util, Workspace};
use worklane_storage_core::{Meeting, MeetingPatch, Recurrence};

impl Workspace {
    pub async fn create_meeting(
        &mut self,
        table_id: &str,
        title: &str,
        date: &str,
        time: &str,
        participant_ids: Vec<String>,
        recurrence: Recurrence,
    ) -> eyre::Result<Meeting> {
        let meeting = Meeting {
            id: util::new_id("mtg"),
            table_id: table_id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            participant_ids,
            summary: String::new(),
            recurrence,
        };
        self.meetings.push(meeting.clone());
        self.store.set_meetings(&self.meetings).await?;
        self.log_activity("scheduled meeting", title).await?;
        Ok(meeting)
    }

    pub async fn update_meeting(
        &mut self,
        meeting_id: &str,
        patch: MeetingPatch,
    ) -> eyre::Result<Meeting> {
        let current = self
            .meetings
            .iter()
            .find(|m| m.id == meeting_id)
            .cloned()
            .ok_or_else(|| eyre::eyre!("Meeting '{meeting_id}' not found"))?;
        let updated = patch.apply(&current);
        for meeting in self.meetings.iter_mut() {
            if meeting.id == meeting_id {
                *meeting = updated.clone();
            }
        }
        self.store.set_meetings(&self.meetings).await?;
        Ok(updated)
    }

    pub async fn save_meeting_summary(
        &mut self,
        meeting_id: &str,
        summary: &str,
    ) -> eyre::Result<Meeting> {
        let patch = MeetingPatch {
            summary: Some(summary.to_string()),
            ..Default::default()
        };
        self.update_meeting(meeting_id, patch).await
    }

    pub async fn delete_meeting(&mut self, meeting_id: &str) -> eyre::Result<()> {
        if !self.meetings.iter().any(|m| m.id == meeting_id) {
            return Err(eyre::eyre!("Meeting '{meeting_id}' not found"));
        }
        self.meetings.retain(|m| m.id != meeting_id);
        self.store.set_meetings(&self.meetings).await
    }

    /// Meetings of one table ordered by date, then wall-clock time. The ISO
    /// formats sort correctly as strings.
    pub fn meetings_sorted(&self, table_id: &str) -> Vec<&Meeting> {
        let mut rows: Vec<&Meeting> = self
            .meetings
            .iter()
            .filter(|m| m.table_id == table_id)
            .collect();
        rows.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        rows
    }
}
