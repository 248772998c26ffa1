use std::fmt;

use super::Language;

/// The closed set of supported speech model identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhisperModel {
    Tiny,
    TinyEn,
    Base,
    BaseEn,
    Small,
    SmallEn,
    Medium,
    MediumEn,
    Large,
}

impl WhisperModel {
    pub const ALL: [WhisperModel; 9] = [
        Self::Tiny,
        Self::TinyEn,
        Self::Base,
        Self::BaseEn,
        Self::Small,
        Self::SmallEn,
        Self::Medium,
        Self::MediumEn,
        Self::Large,
    ];

    /// Maps a requested model name to a concrete model, applying the
    /// English-specialised substitution when the resolved language is
    /// English and the base model has such a variant.
    pub fn select(name: &str, language: &Language) -> Result<Self, ModelError> {
        let needle = name.trim().to_lowercase();
        let model = Self::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| ModelError::Unknown(needle))?;

        if language.is_english() {
            if let Some(english) = model.english_variant() {
                return Ok(english);
            }
        }
        Ok(model)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::TinyEn => "tiny.en",
            Self::Base => "base",
            Self::BaseEn => "base.en",
            Self::Small => "small",
            Self::SmallEn => "small.en",
            Self::Medium => "medium",
            Self::MediumEn => "medium.en",
            Self::Large => "large",
        }
    }

    /// The English-specialised sibling, if one exists. Total over the enum:
    /// English variants map to themselves, `large` has none.
    pub fn english_variant(self) -> Option<Self> {
        match self {
            Self::Tiny => Some(Self::TinyEn),
            Self::Base => Some(Self::BaseEn),
            Self::Small => Some(Self::SmallEn),
            Self::Medium => Some(Self::MediumEn),
            Self::TinyEn | Self::BaseEn | Self::SmallEn | Self::MediumEn => Some(self),
            Self::Large => None,
        }
    }

    /// File name of the ggml weight artifact for this model.
    pub fn artifact_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }

    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unknown model: {0}. valid models are: {names}", names = WhisperModel::valid_names())]
    Unknown(String),
}
