//! List-page composition: fetch, filter, paginate, delete.
//!
//! Mirrors the CRUD list pages: a load replaces the in-memory list, a search
//! change filters it client-side and returns to page 1, and a delete asks for
//! confirmation, issues the request, and reloads the full list on success
//! (no optimistic removal). Failures surface as notifications and are never
//! retried automatically.

use serde::de::DeserializeOwned;
use serde_json::Value;

use fittrack_api::Client;

use crate::filter::{self, Searchable};
use crate::pagination::Paginated;

/// Load state of a list page: `Idle -> Loading -> (Loaded | Errored)`.
/// An errored page keeps its previous (stale or empty) items visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Sink for user-facing notifications (the toast analog).
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

/// Explicit confirmation seam for destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Controller for one CRUD list page.
pub struct ListPage<T> {
    endpoint: String,
    /// Resource name used in notifications, e.g. "exercise".
    label: String,
    items: Vec<T>,
    search: String,
    pager: Paginated<T>,
    state: LoadState,
}

impl<T> ListPage<T>
where
    T: Searchable + Clone + DeserializeOwned,
{
    pub fn new(endpoint: &str, label: &str, page_size: usize) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            label: label.to_string(),
            items: Vec::new(),
            search: String::new(),
            pager: Paginated::new(Vec::new(), page_size),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// All items from the last successful load, unfiltered.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Number of items matching the current search.
    pub fn filtered_len(&self) -> usize {
        self.pager.len()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    /// The filtered slice visible on the current page.
    pub fn visible(&self) -> &[T] {
        self.pager.current_page_items()
    }

    /// Fetches the full list. Success replaces the items, clamping the
    /// current page to the new page count (so a reload after a delete on the
    /// last page stays on the last valid page); failure notifies and keeps
    /// whatever was loaded before. Only a search change resets to page 1.
    pub async fn load(&mut self, client: &Client, notifier: &dyn Notifier) {
        self.state = LoadState::Loading;
        match client.get::<Vec<T>>(&self.endpoint).await {
            Ok(items) => {
                self.items = items;
                self.apply_filter();
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("failed to load {} list: {}", self.label, e);
                notifier.notify("Error", &format!("Could not load the {} list.", self.label));
                self.state = LoadState::Errored;
            }
        }
    }

    /// Updates the search term and returns to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.apply_filter();
        self.pager.reset_to_first_page();
    }

    pub fn next_page(&mut self) {
        self.pager.next_page();
    }

    pub fn previous_page(&mut self) {
        self.pager.previous_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page);
    }

    /// Deletes one item after explicit confirmation. Success reloads the
    /// list and notifies; failure notifies only. Returns whether the item
    /// was deleted.
    pub async fn delete_item(
        &mut self,
        client: &Client,
        id: i64,
        confirm: &dyn Confirm,
        notifier: &dyn Notifier,
    ) -> bool {
        let prompt = format!("Are you sure you want to delete this {}?", self.label);
        if !confirm.confirm(&prompt) {
            return false;
        }

        match client.delete::<Value>(&format!("{}/{}", self.endpoint, id)).await {
            Ok(_) => {
                self.load(client, notifier).await;
                notifier.notify(
                    "Deleted",
                    &format!("The {} was removed successfully.", self.label),
                );
                true
            }
            Err(e) => {
                tracing::error!("failed to delete {} {}: {}", self.label, id, e);
                notifier.notify("Error", &format!("Could not delete the {}.", self.label));
                false
            }
        }
    }

    fn apply_filter(&mut self) {
        self.pager.set_items(filter::filter_items(&self.items, &self.search));
    }
}
