use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{EngineError, EngineRequest, SpeechEngine};
use crate::domain::{Transcript, TranscriptSegment};

/// Segments in flight between the stdout parser and the collector.
const SEGMENT_CHANNEL_CAPACITY: usize = 64;

/// Speech engine adapter around the whisper.cpp CLI. Segments are parsed
/// off the child's stdout as they are printed and streamed to the collector
/// through a bounded channel, so the transcript grows in emission order
/// rather than materialising only at process exit.
pub struct WhisperCliEngine {
    executable: PathBuf,
}

impl WhisperCliEngine {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl SpeechEngine for WhisperCliEngine {
    async fn transcribe(
        &self,
        request: EngineRequest,
        cancel: &CancellationToken,
    ) -> Result<Transcript, EngineError> {
        match tokio::fs::try_exists(&request.audio).await {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                // Conversion should have produced this file. Internal fault.
                tracing::error!(
                    path = %request.audio.display(),
                    "PCM asset missing before transcription"
                );
                return Err(EngineError::AssetMissing(request.audio));
            }
        }

        let mut command = Command::new(&self.executable);
        command
            .arg("-f")
            .arg(&request.audio)
            .arg("-m")
            .arg(&request.model_path)
            .args(["-l", request.language.as_str()])
            .args(["-t", &request.threads.to_string()]);
        if request.translate {
            command.arg("-tr");
        }

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| EngineError::Failed(format!("failed to start engine: {e}")))?;

        let stdout = child.stdout.take().expect("stdout piped");
        let mut stderr = child.stderr.take().expect("stderr piped");

        let (tx, mut rx) = mpsc::channel::<TranscriptSegment>(SEGMENT_CHANNEL_CAPACITY);
        let producer = tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if let Some(segment) = parse_segment_line(&line) {
                    if tx.send(segment).await.is_err() {
                        break;
                    }
                }
            }
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr.read_to_end(&mut buf).await;
            buf
        });

        let mut segments = Vec::new();
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    let _ = child.kill().await;
                    producer.abort();
                    return Err(EngineError::Canceled);
                }
                received = rx.recv() => match received {
                    Some(segment) => segments.push(segment),
                    None => break,
                }
            }
        }

        let status = tokio::select! {
            status = child.wait() => {
                status.map_err(|e| EngineError::Failed(format!("engine wait failed: {e}")))?
            }
            _ = cancel.cancelled() => {
                let _ = child.kill().await;
                return Err(EngineError::Canceled);
            }
        };

        if !status.success() {
            let diagnostics = stderr_task.await.unwrap_or_default();
            tracing::warn!(
                status = status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&diagnostics),
                "Engine exited with failure"
            );
            return Err(EngineError::Failed(format!(
                "engine exited with status {}",
                status.code().unwrap_or(-1)
            )));
        }

        Ok(Transcript::new(segments))
    }
}

/// Startup probe: the configured whisper binary must answer `-h`.
pub async fn check_whisper_binary(executable: &Path) -> Result<(), std::io::Error> {
    let output = Command::new(executable)
        .arg("-h")
        .stdin(Stdio::null())
        .output()
        .await?;
    if !output.status.success() {
        return Err(std::io::Error::other(format!(
            "whisper binary at {} exited with status {}",
            executable.display(),
            output.status.code().unwrap_or(-1)
        )));
    }
    Ok(())
}

/// Parses one whisper.cpp stdout line of the shape
/// `[00:00:00.000 --> 00:00:02.500]   text`. Non-segment lines yield None.
pub fn parse_segment_line(line: &str) -> Option<TranscriptSegment> {
    let rest = line.trim_start().strip_prefix('[')?;
    let (times, text) = rest.split_once(']')?;
    let (from, to) = times.split_once(" --> ")?;
    let start = parse_timestamp(from.trim())?;
    let end = parse_timestamp(to.trim())?;
    Some(TranscriptSegment {
        start,
        end,
        text: text.trim().to_string(),
        confidence: None,
    })
}

fn parse_timestamp(value: &str) -> Option<Duration> {
    let mut parts = value.splitn(3, ':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let (seconds, millis) = parts.next()?.split_once('.')?;
    let seconds: u64 = seconds.parse().ok()?;
    let millis: u64 = millis.parse().ok()?;
    Some(Duration::from_millis(
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
    ))
}
