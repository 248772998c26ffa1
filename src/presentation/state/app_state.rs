use std::sync::Arc;

use crate::application::ports::{AudioConverter, ModelProvider, SpeechEngine};
use crate::application::services::{RateLimiter, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<C, E, M>
where
    C: AudioConverter,
    E: SpeechEngine,
    M: ModelProvider,
{
    pub transcription_service: Arc<TranscriptionService<C, E, M>>,
    pub rate_limiter: Arc<RateLimiter>,
    pub settings: Settings,
}

impl<C, E, M> Clone for AppState<C, E, M>
where
    C: AudioConverter,
    E: SpeechEngine,
    M: ModelProvider,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            rate_limiter: Arc::clone(&self.rate_limiter),
            settings: self.settings.clone(),
        }
    }
}
