use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use sibu::application::services::{ConcurrencyGate, RateLimiter, TranscriptionService};
use sibu::infrastructure::audio::{check_ffmpeg_binary, FfmpegConverter};
use sibu::infrastructure::engine::{check_whisper_binary, WhisperCliEngine};
use sibu::infrastructure::models::HuggingFaceModelProvider;
use sibu::infrastructure::observability::{init_tracing, TracingConfig};
use sibu::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    check_ffmpeg_binary(&settings.audio.ffmpeg_path)
        .await
        .map_err(|e| anyhow::anyhow!("ffmpeg is not available: {e}"))?;
    if let Err(e) = check_whisper_binary(&settings.models.whisper_path).await {
        tracing::warn!(error = %e, "Whisper binary probe failed; transcription requests will fail until it is installed");
    }

    let cpus = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);

    let gate = Arc::new(match settings.limits.max_concurrent_jobs {
        Some(capacity) => ConcurrencyGate::new(capacity),
        None => ConcurrencyGate::for_cpu_count(cpus),
    });
    let rate_limiter = Arc::new(RateLimiter::new(
        settings
            .limits
            .rate_capacity
            .unwrap_or((cpus as u32).saturating_mul(2).max(1)),
        settings.limits.rate_tokens_per_period,
        settings.limits.rate_period(),
    ));

    let converter = Arc::new(FfmpegConverter::new(&settings.audio.ffmpeg_path));
    let engine = Arc::new(WhisperCliEngine::new(&settings.models.whisper_path));
    let models = Arc::new(HuggingFaceModelProvider::new(&settings.models.model_dir));

    let transcription_service = Arc::new(TranscriptionService::new(
        converter,
        engine,
        models,
        Arc::clone(&gate),
        settings.audio.work_dir.clone(),
        std::cmp::max(1, cpus / 2),
    ));

    tracing::info!(
        gate_capacity = gate.capacity(),
        work_dir = %settings.audio.work_dir.display(),
        model_dir = %settings.models.model_dir.display(),
        "Transcription pipeline ready"
    );

    let state = AppState {
        transcription_service,
        rate_limiter,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
