use std::fmt;

/// A resolved transcription language: either a concrete two-letter code or
/// automatic detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Auto,
    Code(&'static str),
}

impl Language {
    /// Resolves a free-form language string to a canonical code.
    ///
    /// `None`, empty, and `"auto"` (any case, surrounding whitespace) all
    /// resolve to [`Language::Auto`]. Anything else is matched against the
    /// known-language table: exact two-letter code first, then exact English
    /// name, then substring containment in the native or English name.
    /// First match wins.
    pub fn validate(raw: Option<&str>) -> Result<Self, LanguageError> {
        let Some(raw) = raw else {
            return Ok(Self::Auto);
        };

        let needle = raw.trim().to_lowercase();
        if needle.is_empty() || needle == "auto" {
            return Ok(Self::Auto);
        }

        if let Some(entry) = KNOWN_LANGUAGES.iter().find(|e| e.code == needle) {
            return Ok(Self::Code(entry.code));
        }

        if let Some(entry) = KNOWN_LANGUAGES.iter().find(|e| e.english == needle) {
            return Ok(Self::Code(entry.code));
        }

        if let Some(entry) = KNOWN_LANGUAGES.iter().find(|e| {
            e.native.to_lowercase().contains(&needle) || e.english.contains(&needle)
        }) {
            return Ok(Self::Code(entry.code));
        }

        Err(LanguageError::Unknown(needle))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Code(code) => code,
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Self::Code("en"))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("unknown language: {0}")]
    Unknown(String),
}

struct LanguageEntry {
    code: &'static str,
    /// Lowercased English name, matched exactly.
    english: &'static str,
    /// Native name as written, matched case-insensitively by containment.
    native: &'static str,
}

/// Languages the speech engine supports. Codes are unique; English names are
/// stored lowercase so validation never allocates on the table side.
static KNOWN_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", english: "english", native: "English" },
    LanguageEntry { code: "zh", english: "chinese", native: "中文" },
    LanguageEntry { code: "de", english: "german", native: "Deutsch" },
    LanguageEntry { code: "es", english: "spanish", native: "Español" },
    LanguageEntry { code: "ru", english: "russian", native: "Русский" },
    LanguageEntry { code: "ko", english: "korean", native: "한국어" },
    LanguageEntry { code: "fr", english: "french", native: "Français" },
    LanguageEntry { code: "ja", english: "japanese", native: "日本語" },
    LanguageEntry { code: "pt", english: "portuguese", native: "Português" },
    LanguageEntry { code: "tr", english: "turkish", native: "Türkçe" },
    LanguageEntry { code: "pl", english: "polish", native: "Polski" },
    LanguageEntry { code: "ca", english: "catalan", native: "Català" },
    LanguageEntry { code: "nl", english: "dutch", native: "Nederlands" },
    LanguageEntry { code: "ar", english: "arabic", native: "العربية" },
    LanguageEntry { code: "sv", english: "swedish", native: "Svenska" },
    LanguageEntry { code: "it", english: "italian", native: "Italiano" },
    LanguageEntry { code: "id", english: "indonesian", native: "Bahasa Indonesia" },
    LanguageEntry { code: "hi", english: "hindi", native: "हिन्दी" },
    LanguageEntry { code: "fi", english: "finnish", native: "Suomi" },
    LanguageEntry { code: "vi", english: "vietnamese", native: "Tiếng Việt" },
    LanguageEntry { code: "he", english: "hebrew", native: "עברית" },
    LanguageEntry { code: "uk", english: "ukrainian", native: "Українська" },
    LanguageEntry { code: "el", english: "greek", native: "Ελληνικά" },
    LanguageEntry { code: "ms", english: "malay", native: "Bahasa Melayu" },
    LanguageEntry { code: "cs", english: "czech", native: "Čeština" },
    LanguageEntry { code: "ro", english: "romanian", native: "Română" },
    LanguageEntry { code: "da", english: "danish", native: "Dansk" },
    LanguageEntry { code: "hu", english: "hungarian", native: "Magyar" },
    LanguageEntry { code: "ta", english: "tamil", native: "தமிழ்" },
    LanguageEntry { code: "no", english: "norwegian", native: "Norsk" },
    LanguageEntry { code: "th", english: "thai", native: "ไทย" },
    LanguageEntry { code: "ur", english: "urdu", native: "اردو" },
    LanguageEntry { code: "hr", english: "croatian", native: "Hrvatski" },
    LanguageEntry { code: "bg", english: "bulgarian", native: "Български" },
    LanguageEntry { code: "lt", english: "lithuanian", native: "Lietuvių" },
    LanguageEntry { code: "cy", english: "welsh", native: "Cymraeg" },
    LanguageEntry { code: "sk", english: "slovak", native: "Slovenčina" },
    LanguageEntry { code: "fa", english: "persian", native: "فارسی" },
    LanguageEntry { code: "et", english: "estonian", native: "Eesti" },
    LanguageEntry { code: "lv", english: "latvian", native: "Latviešu" },
];
