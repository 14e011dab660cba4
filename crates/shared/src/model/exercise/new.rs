use chrono::NaiveDate;
use exemplar::Model;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

/// Insert shape for an exercise. The identifier is assigned here; the
/// owning user must already exist (callers check, and the schema enforces
/// the reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("exercise")]
pub struct NewExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl NewExercise {
    pub fn new<T: Into<String>>(
        user_id: Uuid,
        description: T,
        duration: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date,
        }
    }
}
