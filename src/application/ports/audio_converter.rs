use std::path::Path;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Decodes an uploaded media file into the canonical PCM waveform the
/// speech engine expects (16 kHz, mono, signed 16-bit).
#[async_trait]
pub trait AudioConverter: Send + Sync {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("failed to run decoder: {0}")]
    Io(#[from] std::io::Error),
    #[error("decoder exited with status {status}")]
    Failed { status: i32 },
    #[error("conversion canceled")]
    Canceled,
}
