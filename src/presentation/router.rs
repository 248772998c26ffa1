use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioConverter, ModelProvider, SpeechEngine};
use crate::presentation::handlers::{health_handler, models_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<C, E, M>(state: AppState<C, E, M>) -> Router
where
    C: AudioConverter + Send + Sync + 'static,
    E: SpeechEngine + Send + Sync + 'static,
    M: ModelProvider + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/models", get(models_handler))
        .route("/transcribe", post(transcribe_handler::<C, E, M>))
        .layer(DefaultBodyLimit::max(state.settings.limits.max_body_bytes))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
