use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::WhisperModel;

/// Resolves the on-disk weight artifact for a model, downloading it on
/// first use. Concurrent calls for the same model must not trigger
/// redundant downloads.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn ensure(&self, model: WhisperModel) -> Result<PathBuf, ModelProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelProviderError {
    #[error("model download failed: {0}")]
    Download(String),
    #[error("model storage failed: {0}")]
    Io(#[from] std::io::Error),
}
