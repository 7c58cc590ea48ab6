//! Client-side pagination over an in-memory list.

/// Pagination state over an owned list of items.
///
/// Pure state: it never fetches anything. The invariant
/// `1 <= current_page <= total_pages` holds after every operation, with
/// `total_pages` never below 1 even for an empty list. Callers that change
/// their filter criteria are expected to call [`reset_to_first_page`]
/// explicitly, which is what guarantees a search change always lands the
/// user back on page 1.
///
/// [`reset_to_first_page`]: Paginated::reset_to_first_page
#[derive(Clone, Debug)]
pub struct Paginated<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginated<T> {
    /// Creates pagination state starting on page 1. `page_size` is clamped
    /// to at least 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replaces the items, clamping the current page so it stays valid for
    /// the new length. Reloading after a delete on the last page keeps the
    /// user on the last remaining page rather than jumping to page 1.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page number, 1-indexed.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total page count: `max(1, ceil(len / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// The slice of items visible on the current page.
    pub fn current_page_items(&self) -> &[T] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        if start >= self.items.len() {
            &[]
        } else {
            &self.items[start..end]
        }
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// Retreats one page; no-op on page 1.
    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jumps to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Returns to page 1. Callers invoke this whenever their filter
    /// criteria change.
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }
}
