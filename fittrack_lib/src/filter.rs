//! Client-side search filtering.

use fittrack_api::types::{Exercise, Method, TrainingSchedule, TrainingSheet};

/// Entities that can be matched against a search term by their display fields.
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str {
        ""
    }
}

impl Searchable for Exercise {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Searchable for Method {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Searchable for TrainingSheet {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        self.public_name.as_deref().unwrap_or("")
    }
}

impl Searchable for TrainingSchedule {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Case-insensitive substring match over name and description. An empty or
/// whitespace-only term matches everything.
pub fn matches(item: &impl Searchable, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.name().to_lowercase().contains(&term)
        || item.description().to_lowercase().contains(&term)
}

/// Filters a list down to the items matching the term, preserving order.
pub fn filter_items<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, term))
        .cloned()
        .collect()
}
