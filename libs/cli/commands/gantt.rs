use clap::Args;
use colored::Colorize;
use worklane_core::Workspace;

use crate::commands::list::FilterArgs;

#[derive(Args, Debug)]
pub struct Command {
    #[clap(flatten)]
    filter: FilterArgs,
}

pub async fn handle(command: Command, workspace: &mut Workspace) -> eyre::Result<()> {
    command.filter.apply(workspace);

    let Some(chart) = workspace.gantt_chart() else {
        println!("no dated tasks to chart");
        return Ok(());
    };

    println!(
        "{} days from {}\n",
        chart.total_days,
        chart.origin.format("%Y-%m-%d")
    );
    let label_width = chart
        .rows
        .iter()
        .map(|r| r.task.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(30);
    for row in &chart.rows {
        let title: String = row.task.title.chars().take(30).collect();
        let lead = " ".repeat(row.offset_days as usize);
        let bar = "█".repeat(row.span_days as usize);
        println!("{title:<label_width$}  {lead}{}", bar.blue());
    }
    Ok(())
}
