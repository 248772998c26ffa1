use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{AudioConverter, ModelProvider, SpeechEngine};
use crate::application::services::TranscriptionRequest;
use crate::application::PipelineError;
use crate::presentation::format::ResponseFormat;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

#[tracing::instrument(skip(state, headers, multipart))]
pub async fn transcribe_handler<C, E, M>(
    State(state): State<AppState<C, E, M>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response
where
    C: AudioConverter + Send + Sync + 'static,
    E: SpeechEngine + Send + Sync + 'static,
    M: ModelProvider + Send + Sync + 'static,
{
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok());
    let format = match ResponseFormat::from_accept(accept) {
        Ok(f) => f,
        Err(e) => return error_response(&e),
    };

    let Some(_slip) = state.rate_limiter.try_admit() else {
        tracing::warn!("Request rejected by rate limiter");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "rate_limited",
                message: "too many concurrent requests".to_string(),
            }),
        )
            .into_response();
    };

    let mut file: Option<(Bytes, String)> = None;
    let mut language: Option<String> = None;
    let mut translate = false;
    let mut model = "base".to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "bad_request",
                        message: "malformed multipart body".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        match field.name() {
            Some("file") => {
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(data) => file = Some((data, media_type)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: "bad_request",
                                message: "failed to read uploaded file".to_string(),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Some("lang") => {
                if let Ok(value) = field.text().await {
                    language = Some(value);
                }
            }
            Some("translate") => {
                if let Ok(value) = field.text().await {
                    translate = parse_bool(&value);
                }
            }
            Some("model") => {
                if let Ok(value) = field.text().await {
                    model = value;
                }
            }
            _ => {}
        }
    }

    let Some((data, media_type)) = file else {
        return error_response(&PipelineError::NoFile);
    };

    // Fall back to the Accept-Language primary tag when the form carries
    // no explicit language.
    if language.is_none() {
        language = primary_accept_language(&headers);
    }

    let request = TranscriptionRequest {
        media_type,
        data,
        language,
        translate,
        model,
    };

    // The pipeline runs in its own task so a client disconnect (which drops
    // this handler future) cancels the run through the token instead of
    // abandoning its temp files and gate slot.
    let cancel = CancellationToken::new();
    let _disconnect_guard = cancel.clone().drop_guard();
    let service = Arc::clone(&state.transcription_service);
    let run = tokio::spawn(async move { service.transcribe(request, &cancel).await });

    let result = match run.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Transcription task aborted");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal",
                    message: "internal server error".to_string(),
                }),
            )
                .into_response();
        }
    };

    match result {
        Ok(transcript) => match format.render(&transcript) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, format.content_type())],
                body,
            )
                .into_response(),
            Err(e) => error_response(&e),
        },
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &PipelineError) -> Response {
    let status = match err {
        PipelineError::NoFile => StatusCode::NOT_FOUND,
        PipelineError::InvalidFileType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        PipelineError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
        PipelineError::InvalidModel(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::FileProcessing => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::FileNotFound => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
        // 499 Client Closed Request
        PipelineError::Canceled => {
            StatusCode::from_u16(499).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    if status.is_server_error() {
        tracing::error!(kind = err.kind(), error = %err, "Pipeline run failed");
    } else {
        tracing::warn!(kind = err.kind(), error = %err, "Request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.kind(),
            message: err.to_string(),
        }),
    )
        .into_response()
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Primary language subtag of the first `Accept-Language` entry, e.g.
/// `en` from `en-US,en;q=0.9`. Wildcards yield None.
fn primary_accept_language(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;
    let first = value.split(',').next()?.split(';').next()?.trim();
    if first.is_empty() || first == "*" {
        return None;
    }
    Some(first.split('-').next().unwrap_or(first).to_string())
}
