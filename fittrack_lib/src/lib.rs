//! Library layer for FitTrack: pagination, filtering, session gating, and
//! list-page composition over the `fittrack_api` client.
//!
//! Pages (and the CLI) fetch a full list through the request wrapper, filter
//! it client-side, and feed it to the pagination utility; deletes go through
//! an explicit confirmation seam and reload the list on success.

pub mod error;
pub mod filter;
pub mod list_page;
pub mod pagination;
pub mod schedule;
pub mod session;
pub mod validation;

pub use fittrack_api;
pub use fittrack_api::types;
pub use fittrack_api::{CancelToken, Client, LoadingTracker, RequestOptions};

pub use error::FitTrackError;
pub use filter::Searchable;
pub use list_page::{Confirm, ListPage, LoadState, Notifier};
pub use pagination::Paginated;
pub use session::{ApiSessionStore, AuthResult, Gate, SessionStore};
