use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod ping;
pub use ping::*;

pub mod exercises;
pub mod logs;
pub mod users;

pub fn router(state: AppState) -> Router {
    let assets_dir = state.args.assets_dir.clone();

    Router::new()
        .route(
            Object::Users.path(),
            get(users::list_users).post(users::create_user),
        )
        .route(Object::UserExercises.path(), post(exercises::add_exercise))
        .route(Object::UserLogs.path(), get(logs::fetch_logs))
        .route(Object::Ping.path(), get(ping))
        .nest_service("/", ServeDir::new(&assets_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
