use clap::Parser;

mod commands;
mod tracing;
mod utils;

use utils::{command_error, exit_code::ExitCode};

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "worklane",
    version,
    long_about = Some("A single-tenant workspace: tasks, docs, meetings and an activity inbox.")
)]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, global = true)]
    config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
pub async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => shellexpand::tilde(path).to_string(),
        None => worklane_config::default_config_path()?
            .to_string_lossy()
            .to_string(),
    };
    let config = match worklane_config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::ConfigError.exit()
        }
    };

    if let Err(err) = args.command.execute(&config).await {
        match err {
            command_error::Error::ExitWithError(code, report) => {
                eprintln!("{report:?}");
                code.exit()
            }
            command_error::Error::Exit(code) => code.exit(),
        }
    }
    Ok(())
}
