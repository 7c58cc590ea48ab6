use anyhow::Result;
use clap::{Args, Subcommand};
use fittrack_lib::types::Method;
use fittrack_lib::{validation, Client, Confirm, ListPage, LoadState};

use crate::commands::{AssumeYes, PromptConfirm, StderrNotifier};
use crate::output::{print_json, print_methods_table, OutputFormat};

const ENDPOINT: &str = "db/methods";

#[derive(Args)]
pub struct MethodsArgs {
    #[command(subcommand)]
    pub command: MethodsCommand,
}

#[derive(Subcommand)]
pub enum MethodsCommand {
    /// List training methods with client-side search and pagination
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
    /// Show a single method
    Show { id: i64 },
    /// Delete a method (asks for confirmation)
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(args: &MethodsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        MethodsCommand::List {
            search,
            page,
            page_size,
        } => {
            let page = validation::validate_page(*page)?;
            let page_size = validation::validate_page_size(*page_size)?;

            let mut list: ListPage<Method> = ListPage::new(ENDPOINT, "method", page_size);
            let notifier = StderrNotifier;
            list.load(client, &notifier).await;
            if list.state() == LoadState::Errored {
                anyhow::bail!("could not load methods");
            }

            if let Some(term) = search {
                let term = validation::validate_search(term)?;
                list.set_search(&term);
            }
            list.set_page(page);

            eprintln!(
                "Page {}/{} ({} of {} methods)",
                list.current_page(),
                list.total_pages(),
                list.filtered_len(),
                list.items().len()
            );
            match format {
                OutputFormat::Table => print_methods_table(list.visible()),
                OutputFormat::Json => print_json(&list.visible()),
            }
        }
        MethodsCommand::Show { id } => {
            let method: Method = client.get(&format!("{}/{}", ENDPOINT, id)).await?;
            match format {
                OutputFormat::Table => print_methods_table(std::slice::from_ref(&method)),
                OutputFormat::Json => print_json(&method),
            }
        }
        MethodsCommand::Delete { id, yes } => {
            let mut list: ListPage<Method> = ListPage::new(ENDPOINT, "method", 12);
            let notifier = StderrNotifier;
            let confirm: &dyn Confirm = if *yes { &AssumeYes } else { &PromptConfirm };
            if !list.delete_item(client, *id, confirm, &notifier).await {
                anyhow::bail!("method {} was not deleted", id);
            }
        }
    }

    Ok(())
}
