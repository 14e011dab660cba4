use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, User},
    types::{format_date, Uuid},
};

/// Raw query params accepted by the logs route. All three are left as
/// uninterpreted text here; `LogFilter::from_raw` parses them leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Entry in the log listing; carries no identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

/// Envelope for a user's exercise log. `count` reflects the entries
/// actually returned after any limit was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: &User, exercises: &[Exercise]) -> Self {
        Self {
            username: user.username.clone(),
            count: exercises.len(),
            id: user.id,
            log: exercises.iter().map(LogEntry::from).collect(),
        }
    }
}
