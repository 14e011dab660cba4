use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::response_errors::ExerciseError,
    model::{Exercise, User},
    types::{format_date, parse_date, Uuid},
};

/// Body accepted by the add-exercise route. Durations posted from an HTML
/// form arrive as text, so both a number and a numeric string are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<DurationValue>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Minutes(i64),
    Text(String),
}

/// A validated add-exercise submission. `date` stays optional; the route
/// substitutes the submission day when it is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidExercise {
    pub description: String,
    pub duration: i64,
    pub date: Option<NaiveDate>,
}

impl AddExerciseRequest {
    pub fn validate(&self) -> Result<ValidExercise, ExerciseError> {
        let description = match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => description.to_owned(),
            _ => {
                return Err(ExerciseError::MissingField {
                    field: "description".to_owned(),
                })
            }
        };

        let duration = match &self.duration {
            Some(DurationValue::Minutes(minutes)) => *minutes,
            Some(DurationValue::Text(raw)) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(ExerciseError::MissingField {
                        field: "duration".to_owned(),
                    });
                }
                // No bounds check; zero and negative durations are accepted
                raw.parse::<i64>().map_err(|_| ExerciseError::InvalidNumber {
                    value: raw.to_owned(),
                })?
            }
            None => {
                return Err(ExerciseError::MissingField {
                    field: "duration".to_owned(),
                })
            }
        };

        // A date that fails to parse is treated the same as an absent one
        let date = self.date.as_deref().and_then(parse_date);

        Ok(ValidExercise {
            description,
            duration,
            date,
        })
    }
}

/// Shape returned by the add-exercise route. `_id` carries the owning
/// user's identifier, not the exercise's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl AddExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(exercise.date),
            id: user.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn request(
        description: Option<&str>,
        duration: Option<DurationValue>,
        date: Option<&str>,
    ) -> AddExerciseRequest {
        AddExerciseRequest {
            description: description.map(str::to_owned),
            duration,
            date: date.map(str::to_owned),
        }
    }

    fn minutes(n: i64) -> Option<DurationValue> {
        Some(DurationValue::Minutes(n))
    }

    fn text(t: &str) -> Option<DurationValue> {
        Some(DurationValue::Text(t.to_owned()))
    }

    #[test]
    fn accepts_numeric_and_textual_durations() {
        let valid = request(Some("situps"), minutes(30), None).validate().unwrap();
        assert_eq!(valid.duration, 30);

        let valid = request(Some("situps"), text("45"), None).validate().unwrap();
        assert_eq!(valid.duration, 45);
    }

    #[test]
    fn zero_and_negative_durations_are_accepted() {
        assert_eq!(
            request(Some("rest"), minutes(0), None).validate().unwrap().duration,
            0
        );
        assert_eq!(
            request(Some("rest"), text("-10"), None).validate().unwrap().duration,
            -10
        );
    }

    #[test]
    fn missing_description_or_duration_is_rejected() {
        assert_eq!(
            request(None, minutes(30), None).validate(),
            Err(ExerciseError::MissingField {
                field: "description".to_owned()
            })
        );
        assert_eq!(
            request(Some("   "), minutes(30), None).validate(),
            Err(ExerciseError::MissingField {
                field: "description".to_owned()
            })
        );
        assert_eq!(
            request(Some("situps"), None, None).validate(),
            Err(ExerciseError::MissingField {
                field: "duration".to_owned()
            })
        );
        assert_eq!(
            request(Some("situps"), text("  "), None).validate(),
            Err(ExerciseError::MissingField {
                field: "duration".to_owned()
            })
        );
    }

    #[test]
    fn non_numeric_duration_text_is_rejected() {
        assert_eq!(
            request(Some("situps"), text("half an hour"), None).validate(),
            Err(ExerciseError::InvalidNumber {
                value: "half an hour".to_owned()
            })
        );
    }

    #[test]
    fn dates_parse_leniently() {
        let valid = request(Some("situps"), minutes(30), Some("2024-01-15"))
            .validate()
            .unwrap();
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 1, 15));

        let valid = request(Some("situps"), minutes(30), Some("whenever"))
            .validate()
            .unwrap();
        assert_eq!(valid.date, None);
    }

    #[test]
    fn duration_value_deserializes_from_both_json_forms() {
        let body: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"situps","duration":30}"#).unwrap();
        assert_eq!(body.duration, minutes(30));

        let body: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"situps","duration":"30"}"#).unwrap();
        assert_eq!(body.duration, text("30"));
    }

    #[test]
    fn response_uses_the_contract_field_names_and_order() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_owned(),
            creation_date: Utc::now(),
        };
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: user.id,
            description: "situps".to_owned(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let rendered = serde_json::to_string(&AddExerciseResponse::new(&user, &exercise)).unwrap();
        assert_eq!(
            rendered,
            format!(
                r#"{{"username":"alice","description":"situps","duration":30,"date":"Mon Jan 01 2024","_id":"{}"}}"#,
                user.id
            )
        );
    }
}
