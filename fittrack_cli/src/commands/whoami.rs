use anyhow::Result;
use fittrack_lib::session::{self, Gate};
use fittrack_lib::{ApiSessionStore, Client};

use crate::output::{print_json, print_session, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let store = ApiSessionStore::new(client);

    match session::require_session(&store).await {
        Gate::Allow(Some(session)) => {
            match format {
                OutputFormat::Table => print_session(&session.user),
                OutputFormat::Json => print_json(&session),
            }
            Ok(())
        }
        _ => {
            anyhow::bail!("not authenticated; log in at {}", session::LOGIN_PATH)
        }
    }
}
