use std::time::Duration;

use sibu::domain::{Transcript, TranscriptSegment};
use sibu::presentation::format::to_srt;

fn segment(start_ms: u64, end_ms: u64, text: &str) -> TranscriptSegment {
    TranscriptSegment {
        start: Duration::from_millis(start_ms),
        end: Duration::from_millis(end_ms),
        text: text.to_string(),
        confidence: None,
    }
}

#[test]
fn given_two_segments_when_rendering_srt_then_blocks_are_indexed_and_separated() {
    let transcript = Transcript::new(vec![
        segment(0, 1500, " hello"),
        segment(1500, 3250, "world "),
    ]);

    let expected = "1\n00:00:00,000 --> 00:00:01,500\nhello\n\n2\n00:00:01,500 --> 00:00:03,250\nworld";
    assert_eq!(to_srt(&transcript), expected);
}

#[test]
fn given_offset_beyond_an_hour_when_rendering_srt_then_hours_carry() {
    let transcript = Transcript::new(vec![segment(3_661_042, 3_662_000, "late")]);

    let rendered = to_srt(&transcript);
    assert!(rendered.contains("01:01:01,042 --> 01:01:02,000"));
}

#[test]
fn given_empty_transcript_when_rendering_srt_then_output_is_empty() {
    assert_eq!(to_srt(&Transcript::new(Vec::new())), "");
}
