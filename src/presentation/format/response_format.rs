use serde::Serialize;

use crate::application::PipelineError;
use crate::domain::Transcript;

use super::to_srt;

/// Response representation negotiated from the client's `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
    Xml,
    Srt,
}

impl ResponseFormat {
    /// Picks the first supported media type from a comma-separated `Accept`
    /// value. Absent header or a wildcard defaults to JSON; a header naming
    /// only unsupported types is a client error.
    pub fn from_accept(header: Option<&str>) -> Result<Self, PipelineError> {
        let Some(header) = header else {
            return Ok(Self::Json);
        };
        let header = header.trim();
        if header.is_empty() {
            return Ok(Self::Json);
        }

        for entry in header.split(',') {
            let media = entry
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            match media.as_str() {
                "*/*" => return Ok(Self::Json),
                "text/plain" | "text/*" => return Ok(Self::Text),
                "application/json" => return Ok(Self::Json),
                "application/xml" => return Ok(Self::Xml),
                "application/x-subrip" => return Ok(Self::Srt),
                _ => continue,
            }
        }

        Err(PipelineError::UnsupportedFormat(header.to_string()))
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Srt => "application/x-subrip",
        }
    }

    pub fn render(&self, transcript: &Transcript) -> Result<String, PipelineError> {
        match self {
            Self::Text => Ok(transcript
                .segments
                .iter()
                .map(|s| s.text.trim())
                .collect::<Vec<_>>()
                .join(" ")),
            Self::Json => serde_json::to_string(&TranscriptPayload::from(transcript)).map_err(|e| {
                tracing::error!(error = %e, "JSON rendering failed");
                PipelineError::FileProcessing
            }),
            Self::Xml => {
                quick_xml::se::to_string(&TranscriptPayload::from(transcript)).map_err(|e| {
                    tracing::error!(error = %e, "XML rendering failed");
                    PipelineError::FileProcessing
                })
            }
            Self::Srt => Ok(to_srt(transcript)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename = "transcript")]
struct TranscriptPayload {
    data: Vec<SegmentPayload>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct SegmentPayload {
    start: f64,
    end: f64,
    text: String,
}

impl From<&Transcript> for TranscriptPayload {
    fn from(transcript: &Transcript) -> Self {
        let data = transcript
            .segments
            .iter()
            .map(|s| SegmentPayload {
                start: s.start.as_secs_f64(),
                end: s.end.as_secs_f64(),
                text: s.text.clone(),
            })
            .collect::<Vec<_>>();
        Self {
            count: data.len(),
            data,
        }
    }
}
