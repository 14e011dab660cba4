use axum::Json;
use shared::{
    api::{
        error::{Nothing, ServerError},
        payloads::UserListEntry,
    },
    model::User,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<UserListEntry>>, ServerError<Nothing>> {
    let users = conn
        .interact(|conn| Ok::<_, ServerError<_>>(User::fetch_all(conn)?))
        .await??;

    Ok(Json(users.into_iter().map(UserListEntry::from).collect()))
}
