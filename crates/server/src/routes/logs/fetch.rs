use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogQuery, LogResponse},
        response_errors::LogError,
    },
    model::{Exercise, LogFilter, User},
    types::Uuid,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument]
pub async fn fetch_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ServerError<LogError>> {
    // Window params parse leniently; anything malformed means "no bound"
    let filter = LogFilter::from_raw(
        query.from.as_deref(),
        query.to.as_deref(),
        query.limit.as_deref(),
    );

    let user_id = Uuid::parse(&id).map_err(|_| LogError::UnknownUser { id: id.clone() })?;

    let (user, exercises) = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(LogError::UnknownUser {
                id: user_id.to_string(),
            })?;

            let exercises = Exercise::fetch_log(conn, &user.id, &filter)?;

            Ok::<_, ServerError<_>>((user, exercises))
        })
        .await??;

    Ok(Json(LogResponse::new(&user, &exercises)))
}
