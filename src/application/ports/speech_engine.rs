use std::path::PathBuf;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::{Language, Transcript};

/// One transcription job handed to the engine adapter. The audio path must
/// point at a PCM asset produced by the conversion stage.
#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub audio: PathBuf,
    pub model_path: PathBuf,
    pub language: Language,
    pub translate: bool,
    pub threads: usize,
}

/// The external speech-to-text engine, consumed as a black box. CPU-bound;
/// callers must hold a gate permit while a job runs.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn transcribe(
        &self,
        request: EngineRequest,
        cancel: &CancellationToken,
    ) -> Result<Transcript, EngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The PCM asset the conversion stage should have produced is missing.
    /// This is a pipeline ordering fault, not bad client input.
    #[error("expected audio asset missing at {0}")]
    AssetMissing(PathBuf),
    #[error("engine failed: {0}")]
    Failed(String),
    #[error("transcription canceled")]
    Canceled,
}
