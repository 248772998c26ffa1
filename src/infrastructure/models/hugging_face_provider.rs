use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{ModelProvider, ModelProviderError};
use crate::domain::WhisperModel;

const DEFAULT_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Fetches ggml weight artifacts on demand and caches them in `model_dir`.
/// Downloads are single-flight per model: concurrent first requests for the
/// same model serialize on a per-key mutex while other models proceed.
pub struct HuggingFaceModelProvider {
    model_dir: PathBuf,
    base_url: String,
    client: reqwest::Client,
    downloads: Mutex<HashMap<WhisperModel, Arc<Mutex<()>>>>,
}

impl HuggingFaceModelProvider {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self::with_base_url(model_dir, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(model_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            model_dir: model_dir.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            downloads: Mutex::new(HashMap::new()),
        }
    }

    async fn download(&self, model: WhisperModel, target: &PathBuf) -> Result<(), ModelProviderError> {
        let url = format!("{}/{}", self.base_url, model.artifact_name());
        tracing::info!(%model, "Model artifact missing, downloading");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ModelProviderError::Download(e.to_string()))?;

        // Stream to a partial file, then rename: a failed download never
        // leaves a truncated artifact at the final path.
        let partial = target.with_extension("bin.part");
        let mut file = tokio::fs::File::create(&partial).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ModelProviderError::Download(e.to_string()))?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        drop(file);
        tokio::fs::rename(&partial, target).await?;

        tracing::info!(%model, path = %target.display(), "Model artifact downloaded");
        Ok(())
    }
}

#[async_trait]
impl ModelProvider for HuggingFaceModelProvider {
    async fn ensure(&self, model: WhisperModel) -> Result<PathBuf, ModelProviderError> {
        let target = self.model_dir.join(model.artifact_name());
        if tokio::fs::try_exists(&target).await.unwrap_or(false) {
            return Ok(target);
        }

        let key_lock = {
            let mut map = self.downloads.lock().await;
            Arc::clone(map.entry(model).or_insert_with(|| Arc::new(Mutex::new(()))))
        };
        let _guard = key_lock.lock().await;

        // Another request may have finished the download while we waited.
        if tokio::fs::try_exists(&target).await.unwrap_or(false) {
            return Ok(target);
        }

        tokio::fs::create_dir_all(&self.model_dir).await?;
        self.download(model, &target).await?;
        Ok(target)
    }
}
