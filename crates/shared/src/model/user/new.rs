use chrono::{DateTime, Utc};
use exemplar::Model;
use serde::{Deserialize, Serialize};

use crate::types::Uuid;

/// Insert shape for a user. The identifier and creation date are assigned
/// here rather than by the caller; callers never pick ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Model)]
#[table("user")]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
    pub creation_date: DateTime<Utc>,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            creation_date: Utc::now(),
        }
    }
}
