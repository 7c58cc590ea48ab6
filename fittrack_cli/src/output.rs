use fittrack_lib::types::{Exercise, Method, ScheduleDay, SessionUser, TrainingSheet};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ExerciseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Video")]
    video: String,
}

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct SheetRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Public Name")]
    public_name: String,
}

#[derive(Tabled)]
struct ScheduleDayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Sheet")]
    sheet: String,
}

// -- Row builders --

fn build_exercise_rows(exercises: &[Exercise]) -> Vec<ExerciseRow> {
    exercises
        .iter()
        .map(|e| ExerciseRow {
            id: e.id,
            name: e.name.clone(),
            description: truncate(&e.description, 60),
            video: e.video_url.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_method_rows(methods: &[Method]) -> Vec<MethodRow> {
    methods
        .iter()
        .map(|m| MethodRow {
            id: m.id,
            name: m.name.clone(),
            description: truncate(&m.description, 60),
        })
        .collect()
}

fn build_sheet_rows(sheets: &[TrainingSheet]) -> Vec<SheetRow> {
    sheets
        .iter()
        .map(|s| SheetRow {
            id: s.id,
            name: s.name.clone(),
            public_name: s.public_name.clone().unwrap_or_default(),
        })
        .collect()
}

const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn build_schedule_rows(days: &[ScheduleDay]) -> Vec<ScheduleDayRow> {
    days.iter()
        .map(|d| ScheduleDayRow {
            day: WEEK_DAYS
                .get(d.day.saturating_sub(1) as usize)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Day {}", d.day)),
            sheet: match (&d.custom_name, d.training_sheet_id) {
                (Some(name), _) => name.clone(),
                (None, Some(id)) => format!("sheet #{}", id),
                (None, None) => "rest".to_string(),
            },
        })
        .collect()
}

// -- Table output --

pub fn print_exercises_table(exercises: &[Exercise]) {
    println!("{}", Table::new(build_exercise_rows(exercises)));
}

pub fn print_methods_table(methods: &[Method]) {
    println!("{}", Table::new(build_method_rows(methods)));
}

pub fn print_sheets_table(sheets: &[TrainingSheet]) {
    println!("{}", Table::new(build_sheet_rows(sheets)));
}

pub fn print_schedule_table(days: &[ScheduleDay]) {
    println!("{}", Table::new(build_schedule_rows(days)));
}

pub fn print_session(user: &SessionUser) {
    println!("{} <{}> (id {})", user.name, user.email, user.id);
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}
