use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{AudioConverter, ConversionError};

/// Converts uploads to 16 kHz mono s16le WAV by shelling out to ffmpeg.
pub struct FfmpegConverter {
    executable: PathBuf,
}

impl FfmpegConverter {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl AudioConverter for FfmpegConverter {
    async fn convert(
        &self,
        input: &Path,
        output: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), ConversionError> {
        let mut child = Command::new(&self.executable)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-ar", "16000", "-ac", "1", "-c:a", "pcm_s16le"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // Both pipes must be drained before waiting, or ffmpeg can block
        // on a full pipe buffer.
        let mut stdout = child.stdout.take().expect("stdout piped");
        let mut stderr = child.stderr.take().expect("stderr piped");
        let stdout_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf).await;
            buf
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            buf
        });

        let status = tokio::select! {
            status = child.wait() => status?,
            _ = cancel.cancelled() => {
                let _ = child.kill().await;
                tracing::debug!(input = %input.display(), "Decoder killed on cancellation");
                return Err(ConversionError::Canceled);
            }
        };

        let _ = stdout_task.await;
        let diagnostics = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            // Diagnostic text may contain filesystem paths; log it, never
            // surface it to the client.
            tracing::warn!(
                status = code,
                stderr = %String::from_utf8_lossy(&diagnostics),
                "Decoder exited with failure"
            );
            return Err(ConversionError::Failed { status: code });
        }

        Ok(())
    }
}

/// Startup probe: the configured ffmpeg binary must answer `-version`.
pub async fn check_ffmpeg_binary(executable: &Path) -> Result<(), ConversionError> {
    let output = Command::new(executable)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .await?;
    if !output.status.success() {
        return Err(ConversionError::Failed {
            status: output.status.code().unwrap_or(-1),
        });
    }
    Ok(())
}
