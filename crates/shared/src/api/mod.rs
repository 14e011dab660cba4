use const_format::concatcp;

pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

/// Routes the service answers on. Const so the paths can be shared between
/// the router and anything that needs to build a request against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
    Ping,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
            Ping => concatcp!(API_BASE_PATH, "ping"),
        }
    }

    /// The path with `:id` substituted, for routes addressing a user
    pub fn path_for(&self, id: &str) -> String {
        self.path().replace(":id", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_scoped_paths_substitute_the_id() {
        assert_eq!(
            Object::UserExercises.path_for("abc"),
            "/api/users/abc/exercises"
        );
        assert_eq!(Object::UserLogs.path_for("abc"), "/api/users/abc/logs");
    }
}
