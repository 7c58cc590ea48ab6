mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fittrack_lib::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Manage exercises, methods, workout sheets and weekly schedules")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides FITTRACK_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the exercise catalog
    Exercises(commands::exercises::ExercisesArgs),
    /// Manage training methods
    Methods(commands::methods::MethodsArgs),
    /// List workout sheets
    Sheets(commands::sheets::SheetsArgs),
    /// Inspect and save weekly training schedules
    Schedule(commands::schedule::ScheduleArgs),
    /// Show the current authenticated session
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fittrack=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = match &cli.base_url {
        Some(url) => Client::with_base_url(url),
        None => Client::from_env(),
    };

    match &cli.command {
        Commands::Exercises(args) => commands::exercises::run(args, &client, &format).await?,
        Commands::Methods(args) => commands::methods::run(args, &client, &format).await?,
        Commands::Sheets(args) => commands::sheets::run(args, &client, &format).await?,
        Commands::Schedule(args) => commands::schedule::run(args, &client, &format).await?,
        Commands::Whoami => commands::whoami::run(&client, &format).await?,
    }

    Ok(())
}
