/// Broad class of an uploaded file's declared media type. Only audio and
/// video uploads are admitted into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            m if m.starts_with("audio/") => Some(Self::Audio),
            m if m.starts_with("video/") => Some(Self::Video),
            _ => None,
        }
    }

    /// File extension hint for the raw upload, taken from the mime subtype.
    pub fn extension_from_mime(mime: &str) -> Option<String> {
        let subtype = mime.split('/').nth(1)?;
        let subtype = subtype.split(';').next()?.trim();
        if subtype.is_empty() || !subtype.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(subtype.to_string())
    }
}
