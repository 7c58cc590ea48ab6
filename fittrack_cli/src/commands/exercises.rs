use anyhow::Result;
use clap::{Args, Subcommand};
use fittrack_lib::types::Exercise;
use fittrack_lib::{validation, Client, Confirm, ListPage, LoadState};

use crate::commands::{AssumeYes, PromptConfirm, StderrNotifier};
use crate::output::{print_exercises_table, print_json, OutputFormat};

const ENDPOINT: &str = "db/exercises";

#[derive(Args)]
pub struct ExercisesArgs {
    #[command(subcommand)]
    pub command: ExercisesCommand,
}

#[derive(Subcommand)]
pub enum ExercisesCommand {
    /// List exercises with client-side search and pagination
    List {
        /// Filter by name or description
        #[arg(long)]
        search: Option<String>,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Items per page
        #[arg(long, default_value = "12")]
        page_size: i64,
    },
    /// Show a single exercise
    Show { id: i64 },
    /// Delete an exercise (asks for confirmation)
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(args: &ExercisesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ExercisesCommand::List {
            search,
            page,
            page_size,
        } => {
            let page = validation::validate_page(*page)?;
            let page_size = validation::validate_page_size(*page_size)?;

            let mut list: ListPage<Exercise> = ListPage::new(ENDPOINT, "exercise", page_size);
            let notifier = StderrNotifier;
            list.load(client, &notifier).await;
            if list.state() == LoadState::Errored {
                anyhow::bail!("could not load exercises");
            }

            if let Some(term) = search {
                let term = validation::validate_search(term)?;
                list.set_search(&term);
            }
            list.set_page(page);

            eprintln!(
                "Page {}/{} ({} of {} exercises)",
                list.current_page(),
                list.total_pages(),
                list.filtered_len(),
                list.items().len()
            );
            match format {
                OutputFormat::Table => print_exercises_table(list.visible()),
                OutputFormat::Json => print_json(&list.visible()),
            }
        }
        ExercisesCommand::Show { id } => {
            let exercise: Exercise = client.get(&format!("{}/{}", ENDPOINT, id)).await?;
            match format {
                OutputFormat::Table => print_exercises_table(std::slice::from_ref(&exercise)),
                OutputFormat::Json => print_json(&exercise),
            }
        }
        ExercisesCommand::Delete { id, yes } => {
            let mut list: ListPage<Exercise> = ListPage::new(ENDPOINT, "exercise", 12);
            let notifier = StderrNotifier;
            let confirm: &dyn Confirm = if *yes { &AssumeYes } else { &PromptConfirm };
            if !list.delete_item(client, *id, confirm, &notifier).await {
                anyhow::bail!("exercise {} was not deleted", id);
            }
        }
    }

    Ok(())
}
