use crate::domain::{LanguageError, ModelError};

use super::ports::{ConversionError, EngineError, ModelProviderError};
use super::services::GateError;

/// Terminal error of a failed pipeline run. Every variant carries a stable
/// machine-readable kind; stage diagnostics (subprocess stderr, paths) are
/// logged at the failing stage and never reach the client-visible message.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no file provided")]
    NoFile,
    #[error("file is not audio or video")]
    InvalidFileType,
    #[error(transparent)]
    InvalidLanguage(#[from] LanguageError),
    #[error(transparent)]
    InvalidModel(#[from] ModelError),
    #[error("could not process the file")]
    FileProcessing,
    #[error("an expected intermediate file was not produced")]
    FileNotFound,
    #[error("unsupported response format: {0}")]
    UnsupportedFormat(String),
    #[error("request canceled")]
    Canceled,
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::InvalidFileType => "invalid_file_type",
            Self::InvalidLanguage(_) => "invalid_language",
            Self::InvalidModel(_) => "invalid_model",
            Self::FileProcessing => "file_processing",
            Self::FileNotFound => "file_not_found",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::Canceled => "canceled",
        }
    }
}

impl From<ConversionError> for PipelineError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Canceled => Self::Canceled,
            ConversionError::Io(_) | ConversionError::Failed { .. } => Self::FileProcessing,
        }
    }
}

impl From<EngineError> for PipelineError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::AssetMissing(_) => Self::FileNotFound,
            EngineError::Canceled => Self::Canceled,
            EngineError::Failed(_) => Self::FileProcessing,
        }
    }
}

impl From<ModelProviderError> for PipelineError {
    fn from(_: ModelProviderError) -> Self {
        Self::FileProcessing
    }
}

impl From<GateError> for PipelineError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::Canceled => Self::Canceled,
            GateError::Closed => Self::FileProcessing,
        }
    }
}
