use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::WhisperModel;

pub async fn models_handler() -> impl IntoResponse {
    let names = WhisperModel::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(names))
}
