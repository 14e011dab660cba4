use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateUserRequest, CreateUserResponse},
        response_errors::UserError,
    },
    model::{NewUser, User},
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ServerError<UserError>> {
    let username = request.validate()?;

    let user = conn
        .interact(move |conn| Ok::<_, ServerError<_>>(User::create(conn, NewUser::new(username))?))
        .await??;

    Ok(Json(user.into()))
}
