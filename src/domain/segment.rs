use std::time::Duration;

/// A contiguous span of transcript text with offsets into the source audio.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub start: Duration,
    pub end: Duration,
    pub text: String,
    pub confidence: Option<f32>,
}

/// Ordered sequence of segments produced by one transcription run.
/// Segments arrive in non-decreasing start order and are read-only after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    pub fn count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
