use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use deadpool_sqlite::{Object, Pool};

use crate::internal_error;

/// Hands a pooled store connection to any handler that asks for one
#[derive(Debug)]
pub struct DatabaseConnection(pub Object);

#[async_trait]
impl<S> FromRequestParts<S> for DatabaseConnection
where
    S: Send + Sync,
    Pool: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = Pool::from_ref(state);

        let conn = pool.get().await.map_err(internal_error)?;

        Ok(DatabaseConnection(conn))
    }
}
