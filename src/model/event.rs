use serde::Deserialize;
use serde_json::Value;

use super::course::Course;
use super::roster::{Roster, Team};
use crate::error::AppError;

pub const DEFAULT_EVENT_TITLE: &str = "2025 TruckMovers Invitational";

/// Everything fixed for the life of the process: title, course and teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConfig {
    pub title: String,
    pub course: Course,
    pub roster: Roster,
}

#[derive(Deserialize)]
struct EventFile {
    title: Option<String>,
    par: Vec<i32>,
    teams: Vec<Team>,
}

impl EventConfig {
    /// Builds an event from json of the form
    /// `{ "title": "...", "par": [18 ints], "teams": [{ "name": "...", "pairings": [{ "id": 1, "label": "..." }] }] }`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the json does not have that shape, or the course or roster is invalid
    pub fn from_json(json: Value) -> Result<Self, AppError> {
        let file: EventFile = serde_json::from_value(json)?;
        Ok(Self {
            title: file
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string()),
            course: Course::new(&file.par)?,
            roster: Roster::new(file.teams)?,
        })
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_EVENT_TITLE.to_string(),
            course: Course::default(),
            roster: Roster::default(),
        }
    }
}
