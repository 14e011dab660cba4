use axum::{extract::Path, Json};
use chrono::Utc;
use shared::{
    api::{
        error::ServerError,
        payloads::{AddExerciseRequest, AddExerciseResponse},
        response_errors::ExerciseError,
    },
    model::{Exercise, NewExercise, User},
    types::Uuid,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    Json(request): Json<AddExerciseRequest>,
) -> Result<Json<AddExerciseResponse>, ServerError<ExerciseError>> {
    let valid = request.validate()?;

    // An id that doesn't parse can't name any stored user
    let user_id =
        Uuid::parse(&id).map_err(|_| ExerciseError::UnknownUser { id: id.clone() })?;

    let date = valid.date.unwrap_or_else(|| Utc::now().date_naive());

    let (user, exercise) = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(ExerciseError::UnknownUser {
                id: user_id.to_string(),
            })?;

            let exercise = Exercise::create(
                conn,
                NewExercise::new(user.id, valid.description, valid.duration, date),
            )?;

            Ok::<_, ServerError<_>>((user, exercise))
        })
        .await??;

    Ok(Json(AddExerciseResponse::new(&user, &exercise)))
}
