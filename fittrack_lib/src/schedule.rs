//! Weekly training schedule operations.
//!
//! A schedule assigns a workout sheet (or a rest day) to each day of the
//! week. Drafts are validated locally before being sent to the API.

use serde::Serialize;

use fittrack_api::types::{ScheduleDay, TrainingSchedule, TrainingSheet, TrainingSheetDetail};
use fittrack_api::Client;

use crate::error::FitTrackError;
use crate::validation;

/// Fetches the workout sheets available for assignment.
pub async fn available_sheets(client: &Client) -> Result<Vec<TrainingSheet>, FitTrackError> {
    Ok(client.get("training-sheets").await?)
}

/// Fetches one workout sheet with its training days expanded.
pub async fn sheet_details(
    client: &Client,
    sheet_id: i64,
) -> Result<TrainingSheetDetail, FitTrackError> {
    Ok(client.get(&format!("training-sheets/{}", sheet_id)).await?)
}

/// An unsaved weekly plan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub name: String,
    pub description: String,
    pub week_days: Vec<ScheduleDay>,
}

impl ScheduleDraft {
    /// Checks the draft against the available sheets: non-empty name, day
    /// numbers in 1..=7 without duplicates, and every referenced sheet id
    /// must exist.
    pub fn validate(&self, available: &[TrainingSheet]) -> Result<(), FitTrackError> {
        if self.name.trim().is_empty() {
            return Err(FitTrackError::InvalidInput(
                "schedule name must not be empty".to_string(),
            ));
        }
        if self.week_days.is_empty() {
            return Err(FitTrackError::InvalidInput(
                "schedule must assign at least one day".to_string(),
            ));
        }

        let mut seen = [false; 8];
        for day in &self.week_days {
            validation::validate_week_day(day.day)?;
            if seen[day.day as usize] {
                return Err(FitTrackError::InvalidInput(format!(
                    "day {} is assigned more than once",
                    day.day
                )));
            }
            seen[day.day as usize] = true;

            if let Some(sheet_id) = day.training_sheet_id {
                if !available.iter().any(|sheet| sheet.id == sheet_id) {
                    return Err(FitTrackError::InvalidInput(format!(
                        "unknown training sheet id {} on day {}",
                        sheet_id, day.day
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Validates and persists a draft, returning the stored schedule.
pub async fn save_schedule(
    client: &Client,
    draft: &ScheduleDraft,
    available: &[TrainingSheet],
) -> Result<TrainingSchedule, FitTrackError> {
    draft.validate(available)?;
    let body = serde_json::to_value(draft)?;
    Ok(client.post("training-schedules", body).await?)
}
