mod language;
mod media_type;
mod model;
mod segment;

pub use language::{Language, LanguageError};
pub use media_type::MediaKind;
pub use model::{ModelError, WhisperModel};
pub use segment::{Transcript, TranscriptSegment};
