use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::application::ports::{AudioConverter, EngineRequest, ModelProvider, SpeechEngine};
use crate::application::PipelineError;
use crate::domain::{Language, MediaKind, Transcript, WhisperModel};

use super::concurrency_gate::ConcurrencyGate;

/// One inbound transcription job as received at the HTTP boundary.
/// Immutable once constructed; owned by exactly one pipeline run.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub media_type: String,
    pub data: Bytes,
    pub language: Option<String>,
    pub translate: bool,
    pub model: String,
}

/// Composes validation, conversion, gated transcription and cleanup into
/// one request lifecycle. Every file created during a run is deleted before
/// the run returns, on success, failure and cancellation alike.
pub struct TranscriptionService<C, E, M> {
    converter: Arc<C>,
    engine: Arc<E>,
    models: Arc<M>,
    gate: Arc<ConcurrencyGate>,
    audio_dir: PathBuf,
    engine_threads: usize,
}

impl<C, E, M> TranscriptionService<C, E, M>
where
    C: AudioConverter,
    E: SpeechEngine,
    M: ModelProvider,
{
    pub fn new(
        converter: Arc<C>,
        engine: Arc<E>,
        models: Arc<M>,
        gate: Arc<ConcurrencyGate>,
        audio_dir: PathBuf,
        engine_threads: usize,
    ) -> Self {
        Self {
            converter,
            engine,
            models,
            gate,
            audio_dir,
            engine_threads,
        }
    }

    #[tracing::instrument(skip(self, request, cancel), fields(bytes = request.data.len()))]
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
        cancel: &CancellationToken,
    ) -> Result<Transcript, PipelineError> {
        // Validation happens before any file I/O or gate acquisition.
        if request.data.is_empty() {
            return Err(PipelineError::NoFile);
        }
        if MediaKind::from_mime(&request.media_type).is_none() {
            tracing::warn!(media_type = %request.media_type, "Rejected non-media upload");
            return Err(PipelineError::InvalidFileType);
        }
        let language = Language::validate(request.language.as_deref())?;
        let model = WhisperModel::select(&request.model, &language)?;

        tracing::debug!(%language, %model, "Request validated");

        let file_id = Uuid::new_v4();
        let extension = MediaKind::extension_from_mime(&request.media_type)
            .unwrap_or_else(|| "bin".to_string());
        let raw_path = self.audio_dir.join(format!("{file_id}.{extension}"));
        let pcm_path = self.audio_dir.join(format!("{file_id}.wav"));

        tokio::fs::create_dir_all(&self.audio_dir).await.map_err(|e| {
            tracing::error!(error = %e, dir = %self.audio_dir.display(), "Failed to create audio dir");
            PipelineError::FileProcessing
        })?;

        // Deletes whatever this run actually created, on every exit path,
        // including this future being dropped mid-await.
        let mut scratch = ScratchFiles::new();

        scratch.track(&raw_path);
        tokio::fs::write(&raw_path, &request.data).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist upload");
            PipelineError::FileProcessing
        })?;

        if cancel.is_cancelled() {
            return Err(PipelineError::Canceled);
        }

        tracing::debug!("Converting upload to PCM");
        scratch.track(&pcm_path);
        self.converter.convert(&raw_path, &pcm_path, cancel).await?;

        tracing::debug!(available = self.gate.available(), "Queued for transcription slot");
        let _permit = self.gate.acquire(cancel).await?;

        let model_path = self.models.ensure(model).await.map_err(|e| {
            tracing::error!(error = %e, %model, "Model artifact unavailable");
            PipelineError::from(e)
        })?;

        tracing::debug!("Transcribing");
        let transcript = self
            .engine
            .transcribe(
                EngineRequest {
                    audio: pcm_path.clone(),
                    model_path,
                    language,
                    translate: request.translate,
                    threads: self.engine_threads,
                },
                cancel,
            )
            .await?;

        tracing::info!(segments = transcript.count(), "Transcription completed");
        Ok(transcript)
    }
}

/// Request-scoped temp files, removed when the run ends however it ends.
/// Paths that were never created on disk are skipped silently.
struct ScratchFiles {
    paths: Vec<PathBuf>,
}

impl ScratchFiles {
    fn new() -> Self {
        Self { paths: Vec::new() }
    }

    fn track(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        for path in &self.paths {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Failed to remove temp file");
                }
            }
        }
    }
}
