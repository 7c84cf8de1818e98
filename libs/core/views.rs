//! Read-only view models derived from the filtered task list. A kanban drop
//! or a gantt drag is just an `update_task` with the new status or dates;
//! nothing here owns state.

use crate::Workspace;
use chrono::{Datelike, NaiveDate, Timelike};
use worklane_storage_core::{ActivityEntry, Meeting, StatusOption, TableKind, Task};

#[derive(Debug, Clone)]
pub struct KanbanColumn<'a> {
    pub status: &'a StatusOption,
    pub tasks: Vec<&'a Task>,
}

/// One bar of the gantt chart, positioned in days from the chart origin.
#[derive(Debug, Clone)]
pub struct GanttRow<'a> {
    pub task: &'a Task,
    pub offset_days: i64,
    pub span_days: i64,
}

#[derive(Debug, Clone)]
pub struct GanttChart<'a> {
    pub origin: NaiveDate,
    pub total_days: i64,
    pub rows: Vec<GanttRow<'a>>,
}

#[derive(Debug, Clone)]
pub struct HomeDashboard<'a> {
    pub greeting: &'static str,
    pub user_name: Option<&'a str>,
    /// Open tasks assigned to the signed-in user, archived and done excluded.
    pub my_tasks: Vec<&'a Task>,
    pub recent_activity: Vec<&'a ActivityEntry>,
}

/// One month as a Monday-first grid: `start_offset` leading blanks, then
/// `days_in_month` day cells with the meetings of each day.
#[derive(Debug, Clone)]
pub struct MonthCalendar<'a> {
    pub year: i32,
    pub month: u32,
    pub start_offset: u32,
    pub days_in_month: u32,
    pub meetings_by_day: Vec<Vec<&'a Meeting>>,
}

impl Workspace {
    /// Filtered tasks bucketed into one column per status option, in the
    /// option table's order. Columns for unused statuses stay present and
    /// empty; tasks whose status no longer resolves are dropped.
    pub fn kanban_columns(&self) -> Vec<KanbanColumn<'_>> {
        let tasks = self.filtered_tasks();
        self.statuses
            .iter()
            .map(|status| KanbanColumn {
                status,
                tasks: tasks
                    .iter()
                    .filter(|t| t.status == status.id)
                    .copied()
                    .collect(),
            })
            .collect()
    }

    /// Gantt rows over the filtered tasks' combined date range. Tasks with
    /// unparsable dates are skipped; an end before the start renders as a
    /// one-day bar.
    pub fn gantt_chart(&self) -> Option<GanttChart<'_>> {
        let dated: Vec<(&Task, NaiveDate, NaiveDate)> = self
            .filtered_tasks()
            .into_iter()
            .filter_map(|task| {
                let start = task.start_date.parse::<NaiveDate>().ok()?;
                let end = task.end_date.parse::<NaiveDate>().ok()?;
                Some((task, start, end.max(start)))
            })
            .collect();

        let origin = dated.iter().map(|(_, start, _)| *start).min()?;
        let last = dated.iter().map(|(_, _, end)| *end).max()?;

        let rows = dated
            .into_iter()
            .map(|(task, start, end)| GanttRow {
                task,
                offset_days: (start - origin).num_days(),
                span_days: (end - start).num_days() + 1,
            })
            .collect();

        Some(GanttChart {
            origin,
            total_days: (last - origin).num_days() + 1,
            rows,
        })
    }

    /// Tasks of the backlog table under the shared filters. The backlog is
    /// not a task table, so the hide-done mask never applies here.
    pub fn backlog_tasks(&self) -> Vec<&Task> {
        let Some(backlog) = self.tables.iter().find(|t| t.kind == TableKind::Backlog) else {
            return vec![];
        };
        self.tasks
            .iter()
            .filter(|t| t.table_id == backlog.id && !t.is_archived && self.matches_filter(t))
            .collect()
    }

    pub fn home_dashboard(&self) -> HomeDashboard<'_> {
        self.home_dashboard_at(chrono::Local::now().hour())
    }

    pub(crate) fn home_dashboard_at(&self, hour: u32) -> HomeDashboard<'_> {
        let greeting = match hour {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        };
        let my_tasks = match &self.session_user {
            Some(user) => self
                .tasks
                .iter()
                .filter(|t| {
                    !t.is_archived
                        && t.assignee_id.as_deref() == Some(user.id.as_str())
                        && !self.status_is_done(&t.status)
                })
                .collect(),
            None => vec![],
        };
        HomeDashboard {
            greeting,
            user_name: self.session_user.as_ref().map(|u| u.name.as_str()),
            my_tasks,
            recent_activity: self.activity.iter().take(10).collect(),
        }
    }

    /// Month grid for the meetings view. The offset counts blank leading
    /// cells in a Monday-first week.
    pub fn month_calendar(&self, table_id: &str, year: i32, month: u32) -> Option<MonthCalendar<'_>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let start_offset = first.weekday().num_days_from_monday();
        let days_in_month = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
        }
        .signed_duration_since(first)
        .num_days() as u32;

        let meetings_by_day = (1..=days_in_month)
            .map(|day| {
                let date = format!("{year:04}-{month:02}-{day:02}");
                self.meetings
                    .iter()
                    .filter(|m| m.table_id == table_id && m.date == date)
                    .collect()
            })
            .collect();

        Some(MonthCalendar {
            year,
            month,
            start_offset,
            days_in_month,
            meetings_by_day,
        })
    }
}
