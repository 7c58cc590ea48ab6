use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use fittrack_lib::schedule::{self, ScheduleDraft};
use fittrack_lib::types::{ScheduleDay, TrainingSchedule};
use fittrack_lib::Client;

use crate::output::{print_json, print_schedule_table, OutputFormat};

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Subcommand)]
pub enum ScheduleCommand {
    /// Show a saved weekly schedule
    Show { id: i64 },
    /// Save a weekly schedule assigning sheets to days
    Save {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Day assignment as DAY=SHEET_ID or DAY=rest (repeatable),
        /// e.g. --day 1=100 --day 3=101 --day 7=rest
        #[arg(long = "day", value_name = "DAY=SHEET")]
        days: Vec<String>,
    },
}

/// Parses a `DAY=SHEET_ID` (or `DAY=rest`) assignment.
fn parse_day_assignment(input: &str) -> Result<ScheduleDay> {
    let (day, sheet) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("expected DAY=SHEET, got '{}'", input))?;
    let day: u8 = day
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid day number '{}'", day))?;
    let training_sheet_id = match sheet.trim() {
        "rest" | "" => None,
        id => Some(
            id.parse::<i64>()
                .map_err(|_| anyhow!("invalid sheet id '{}'", id))?,
        ),
    };
    Ok(ScheduleDay {
        day,
        training_sheet_id,
        custom_name: None,
    })
}

pub async fn run(args: &ScheduleArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ScheduleCommand::Show { id } => {
            let saved: TrainingSchedule =
                client.get(&format!("training-schedules/{}", id)).await?;
            match format {
                OutputFormat::Table => {
                    println!("{} - {}", saved.name, saved.description);
                    print_schedule_table(&saved.week_days);
                }
                OutputFormat::Json => print_json(&saved),
            }
        }
        ScheduleCommand::Save {
            name,
            description,
            days,
        } => {
            if days.is_empty() {
                anyhow::bail!("at least one --day assignment is required");
            }
            let week_days = days
                .iter()
                .map(|assignment| parse_day_assignment(assignment))
                .collect::<Result<Vec<_>>>()?;

            let available = schedule::available_sheets(client).await?;
            let draft = ScheduleDraft {
                name: name.clone(),
                description: description.clone(),
                week_days,
            };

            let saved = schedule::save_schedule(client, &draft, &available).await?;
            eprintln!("Saved schedule '{}' (id {})", saved.name, saved.id);
            match format {
                OutputFormat::Table => print_schedule_table(&saved.week_days),
                OutputFormat::Json => print_json(&saved),
            }
        }
    }

    Ok(())
}
