use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Immutable runtime configuration, constructed once at startup and passed
/// into the application state. Nothing reads the environment after this.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub audio: AudioSettings,
    pub models: ModelSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    /// Request-scoped temp files (raw uploads, PCM assets) live here.
    pub work_dir: PathBuf,
    pub ffmpeg_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub model_dir: PathBuf,
    pub whisper_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_body_bytes: usize,
    /// Overrides `cpus * 2` when set.
    pub rate_capacity: Option<u32>,
    pub rate_tokens_per_period: u32,
    pub rate_period_secs: u64,
    /// Overrides `max(1, cpus / 2)` when set.
    pub max_concurrent_jobs: Option<usize>,
}

impl LimitSettings {
    pub fn rate_period(&self) -> Duration {
        Duration::from_secs(self.rate_period_secs)
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            },
            audio: AudioSettings {
                work_dir: std::env::var("AUDIO_WORK_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir().join("sibu-audio")),
                ffmpeg_path: std::env::var("FFMPEG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("ffmpeg")),
            },
            models: ModelSettings {
                model_dir: std::env::var("MODEL_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("models")),
                whisper_path: std::env::var("WHISPER_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("whisper-cli")),
            },
            limits: LimitSettings {
                // 50 MiB upload cap.
                max_body_bytes: std::env::var("MAX_BODY_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(52_428_800),
                rate_capacity: std::env::var("RATE_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok()),
                rate_tokens_per_period: std::env::var("RATE_TOKENS_PER_PERIOD")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2),
                rate_period_secs: std::env::var("RATE_PERIOD_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                max_concurrent_jobs: std::env::var("MAX_CONCURRENT_JOBS")
                    .ok()
                    .and_then(|v| v.parse().ok()),
            },
        }
    }
}
