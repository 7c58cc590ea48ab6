//! Exercise catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An exercise in the catalog, as returned by `/api/db/exercises`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Optional demonstration video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
