use anyhow::Result;
use clap::{Args, Subcommand};
use fittrack_lib::types::TrainingSheetDetail;
use fittrack_lib::{schedule, Client};

use crate::output::{print_json, print_sheets_table, OutputFormat};

#[derive(Args)]
pub struct SheetsArgs {
    #[command(subcommand)]
    pub command: SheetsCommand,
}

#[derive(Subcommand)]
pub enum SheetsCommand {
    /// List the workout sheets available for scheduling
    List,
    /// Show a sheet with its training days
    Show { id: i64 },
}

pub async fn run(args: &SheetsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        SheetsCommand::List => {
            let sheets = schedule::available_sheets(client).await?;
            eprintln!("{} workout sheets", sheets.len());
            match format {
                OutputFormat::Table => print_sheets_table(&sheets),
                OutputFormat::Json => print_json(&sheets),
            }
        }
        SheetsCommand::Show { id } => {
            let detail: TrainingSheetDetail = schedule::sheet_details(client, *id).await?;
            match format {
                OutputFormat::Table => {
                    println!(
                        "{} ({}) - {} training days",
                        detail.name,
                        detail.public_name.as_deref().unwrap_or("no public name"),
                        detail.training_days.len()
                    );
                    for day in &detail.training_days {
                        let exercises = day
                            .exercise_group
                            .as_ref()
                            .map(|group| {
                                group
                                    .exercise_methods
                                    .iter()
                                    .map(|m| m.exercise_configurations.len())
                                    .sum::<usize>()
                            })
                            .unwrap_or(0);
                        println!(
                            "  {} ({} exercises)",
                            day.name.as_deref().unwrap_or("unnamed day"),
                            exercises
                        );
                    }
                }
                OutputFormat::Json => print_json(&detail),
            }
        }
    }

    Ok(())
}
