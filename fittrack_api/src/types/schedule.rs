//! Weekly training schedule types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day of the week within a schedule. `day` runs 1-7 (Monday-Sunday).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub day: u8,

    /// Workout sheet assigned to this day, if any (rest days have none).
    #[serde(default)]
    pub training_sheet_id: Option<i64>,

    /// Local display name only; never persisted on the sheet itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

/// A persisted weekly plan assigning workout sheets to days.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSchedule {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub week_days: Vec<ScheduleDay>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
