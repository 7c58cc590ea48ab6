//! Workout sheet types.

use serde::{Deserialize, Serialize};

use super::{Exercise, Method};

/// Summary of a workout sheet, used for selection lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSheet {
    pub id: i64,

    pub name: String,

    /// Display name shown to the student, when it differs from the
    /// internal name.
    #[serde(default)]
    pub public_name: Option<String>,
}

/// Full workout sheet with its training days expanded.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSheetDetail {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub public_name: Option<String>,

    #[serde(default)]
    pub training_days: Vec<TrainingDay>,
}

/// One training day within a sheet.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub exercise_group: Option<ExerciseGroup>,
}

/// Ordered group of exercise/method pairings for a training day.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub id: i64,

    #[serde(default)]
    pub exercise_methods: Vec<ExerciseMethod>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMethod {
    pub id: i64,

    /// Position within the group.
    #[serde(default)]
    pub order: i64,

    #[serde(default)]
    pub exercise_configurations: Vec<ExerciseConfiguration>,
}

/// A configured exercise: which exercise, which method, and the prescription.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseConfiguration {
    pub id: i64,

    #[serde(default)]
    pub exercise: Option<Exercise>,

    #[serde(default)]
    pub method: Option<Method>,

    #[serde(default)]
    pub series: Option<i64>,

    #[serde(default)]
    pub repetitions: Option<String>,
}
