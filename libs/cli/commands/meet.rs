use chrono::Datelike;
use clap::{Args, Subcommand};
use colored::Colorize;
use worklane_core::Workspace;
use worklane_storage_core::{Recurrence, TableKind};

use crate::utils::command_error::{self, Error};
use crate::utils::display::{LogBuilder, LogType};
use crate::utils::exit_code::ExitCode;

#[derive(Args, Debug)]
pub struct Command {
    /// Meetings table to work in; defaults to the first one
    #[clap(short, long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Schedule a meeting
    Add {
        title: String,
        /// Date, YYYY-MM-DD
        date: String,
        /// Wall-clock time, HH:MM
        time: String,
        /// Participant user ids
        #[clap(long, value_name = "USER_ID")]
        with: Vec<String>,
        /// none, daily, weekly or monthly
        #[clap(long)]
        recur: Option<String>,
    },
    /// Write the summary of a past meeting
    Summary { meeting_id: String, text: String },
    /// Cancel a meeting
    Rm { meeting_id: String },
    /// Month grid, Monday first
    Calendar {
        /// Month to show as YYYY-MM; defaults to the current month
        month: Option<String>,
    },
}

fn parse_recurrence(raw: &str) -> command_error::Result<Recurrence> {
    match raw {
        "none" => Ok(Recurrence::None),
        "daily" => Ok(Recurrence::Daily),
        "weekly" => Ok(Recurrence::Weekly),
        "monthly" => Ok(Recurrence::Monthly),
        other => Err(Error::ExitWithError(
            ExitCode::DataError,
            eyre::eyre!("unknown recurrence '{other}'"),
        )),
    }
}

fn parse_month(raw: &str) -> command_error::Result<(i32, u32)> {
    let parsed = raw
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse().ok()?, m.parse().ok()?)));
    parsed.ok_or_else(|| {
        Error::ExitWithError(
            ExitCode::DataError,
            eyre::eyre!("expected YYYY-MM, got '{raw}'"),
        )
    })
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> command_error::Result<()> {
    let table_id = match command.table {
        Some(id) => id,
        None => workspace
            .tables
            .iter()
            .find(|t| t.kind == TableKind::Meetings)
            .map(|t| t.id.clone())
            .ok_or_else(|| eyre::eyre!("no meetings table exists"))?,
    };

    match command.action {
        None => {
            for meeting in workspace.meetings_sorted(&table_id) {
                println!(
                    "{} {} {}  {} ({} participants)",
                    meeting.id.dimmed(),
                    meeting.date,
                    meeting.time,
                    meeting.title.bold(),
                    meeting.participant_ids.len()
                );
            }
        }
        Some(Action::Add {
            title,
            date,
            time,
            with,
            recur,
        }) => {
            let recurrence = match recur.as_deref() {
                Some(raw) => parse_recurrence(raw)?,
                None => Recurrence::None,
            };
            let meeting = workspace
                .create_meeting(&table_id, &title, &date, &time, with, recurrence)
                .await?;
            LogBuilder::new(LogType::Success, format!("Scheduled '{}'", meeting.title))
                .with_branch("Id", meeting.id)
                .with_branch("When", format!("{} {}", meeting.date, meeting.time))
                .print();
        }
        Some(Action::Summary { meeting_id, text }) => {
            let meeting = workspace.save_meeting_summary(&meeting_id, &text).await?;
            LogBuilder::new(LogType::Success, format!("Summary saved for '{}'", meeting.title))
                .print();
        }
        Some(Action::Rm { meeting_id }) => {
            workspace.delete_meeting(&meeting_id).await?;
            LogBuilder::new(LogType::Warning, "Meeting cancelled")
                .with_branch("Id", meeting_id)
                .print();
        }
        Some(Action::Calendar { month }) => {
            let (year, month) = match month {
                Some(raw) => parse_month(&raw)?,
                None => {
                    let today = chrono::Local::now().date_naive();
                    (today.year(), today.month())
                }
            };
            let calendar = workspace.month_calendar(&table_id, year, month).ok_or_else(|| {
                Error::ExitWithError(
                    ExitCode::DataError,
                    eyre::eyre!("'{year}-{month:02}' is not a valid month"),
                )
            })?;

            println!("{}", format!("{year}-{month:02}").bold());
            println!("Mo Tu We Th Fr Sa Su");
            let mut cells: Vec<String> = vec![];
            cells.resize(calendar.start_offset as usize, "  ".to_string());
            for day in 1..=calendar.days_in_month {
                let busy = !calendar.meetings_by_day[(day - 1) as usize].is_empty();
                let cell = format!("{day:>2}");
                cells.push(if busy {
                    cell.on_blue().to_string()
                } else {
                    cell
                });
            }
            for week in cells.chunks(7) {
                println!("{}", week.join(" "));
            }
        }
    }
    Ok(())
}
