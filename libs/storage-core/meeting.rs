use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub table_id: String,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Wall-clock time, `HH:MM`.
    pub time: String,
    #[serde(default)]
    pub participant_ids: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recurrence: Recurrence,
}

#[derive(Default, Debug, Clone, Deserialize)]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub participant_ids: Option<Vec<String>>,
    pub summary: Option<String>,
    pub recurrence: Option<Recurrence>,
}

impl MeetingPatch {
    pub fn apply(self, meeting: &Meeting) -> Meeting {
        Meeting {
            id: meeting.id.clone(),
            table_id: meeting.table_id.clone(),
            title: self.title.unwrap_or_else(|| meeting.title.clone()),
            date: self.date.unwrap_or_else(|| meeting.date.clone()),
            time: self.time.unwrap_or_else(|| meeting.time.clone()),
            participant_ids: self
                .participant_ids
                .unwrap_or_else(|| meeting.participant_ids.clone()),
            summary: self.summary.unwrap_or_else(|| meeting.summary.clone()),
            recurrence: self.recurrence.unwrap_or(meeting.recurrence),
        }
    }
}
