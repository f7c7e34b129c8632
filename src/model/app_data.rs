use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::course::Course;
use super::round::Round;
use crate::error::StatsError;

/// The export file written by the tracking app: every course and round.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AppData {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl AppData {
    /// # Errors
    ///
    /// Will return `Err` if the text is not a valid export document
    pub fn from_json_str(json: &str) -> Result<Self, StatsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let contents = fs::read_to_string(path)?;
        let data = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            courses = data.courses.len(),
            rounds = data.rounds.len(),
            "loaded export file"
        );
        Ok(data)
    }

    /// # Errors
    ///
    /// Will return `Err` if no course has the given id
    pub fn course(&self, course_id: &str) -> Result<&Course, StatsError> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or_else(|| StatsError::NotFound(format!("course {course_id}")))
    }

    /// # Errors
    ///
    /// Will return `Err` if no round has the given id
    pub fn round(&self, round_id: &str) -> Result<&Round, StatsError> {
        self.rounds
            .iter()
            .find(|r| r.id == round_id)
            .ok_or_else(|| StatsError::NotFound(format!("round {round_id}")))
    }
}
