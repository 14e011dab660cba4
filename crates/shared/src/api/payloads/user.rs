use serde::{Deserialize, Serialize};

use crate::{api::response_errors::UserError, model::User, types::Uuid};

/// Body accepted by the create-user route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

impl CreateUserRequest {
    /// Presence check only; usernames are otherwise free-form
    pub fn validate(&self) -> Result<String, UserError> {
        match self.username.as_deref().map(str::trim) {
            Some(username) if !username.is_empty() => Ok(username.to_owned()),
            _ => Err(UserError::MissingUsername),
        }
    }
}

/// Shape returned when a user is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Entry in the user listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserListEntry {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn request(username: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_a_trimmed_username() {
        assert_eq!(request(Some("alice")).validate(), Ok("alice".to_owned()));
        assert_eq!(request(Some("  bob  ")).validate(), Ok("bob".to_owned()));
    }

    #[test]
    fn rejects_absent_empty_or_blank_usernames() {
        assert_eq!(request(None).validate(), Err(UserError::MissingUsername));
        assert_eq!(request(Some("")).validate(), Err(UserError::MissingUsername));
        assert_eq!(request(Some("   ")).validate(), Err(UserError::MissingUsername));
    }

    #[test]
    fn responses_use_the_contract_field_names_and_order() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_owned(),
            creation_date: Utc::now(),
        };
        let id = user.id;

        let created = serde_json::to_string(&CreateUserResponse::from(user.clone())).unwrap();
        assert_eq!(created, format!(r#"{{"username":"alice","_id":"{id}"}}"#));

        let listed = serde_json::to_string(&UserListEntry::from(user)).unwrap();
        assert_eq!(listed, format!(r#"{{"_id":"{id}","username":"alice"}}"#));
    }
}
