use axum::http::StatusCode;

/// Map an extractor-level failure into a plain 500 response
pub fn internal_error<E: std::fmt::Debug>(err: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:?}"))
}
