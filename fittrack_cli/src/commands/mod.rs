pub mod exercises;
pub mod methods;
pub mod schedule;
pub mod sheets;
pub mod whoami;

use fittrack_lib::{Confirm, Notifier};

/// Prints notifications to stderr so they never mix with table/JSON output.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

/// Interactive confirmation prompt for destructive actions.
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Non-interactive confirmation used with `--yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
