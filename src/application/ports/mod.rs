mod audio_converter;
mod model_provider;
mod speech_engine;

pub use audio_converter::{AudioConverter, ConversionError};
pub use model_provider::{ModelProvider, ModelProviderError};
pub use speech_engine::{EngineError, EngineRequest, SpeechEngine};
