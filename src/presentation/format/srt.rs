use std::fmt::Write;
use std::time::Duration;

use crate::domain::Transcript;

/// Renders a transcript as SubRip text: 1-indexed cue blocks with
/// `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing lines, separated by blank lines.
/// Trailing whitespace is trimmed from the whole document.
pub fn to_srt(transcript: &Transcript) -> String {
    let mut out = String::new();
    for (index, segment) in transcript.segments.iter().enumerate() {
        let _ = writeln!(out, "{}", index + 1);
        let _ = writeln!(
            out,
            "{} --> {}",
            format_timestamp(segment.start),
            format_timestamp(segment.end)
        );
        let _ = writeln!(out, "{}", segment.text.trim());
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}

fn format_timestamp(offset: Duration) -> String {
    let total_millis = offset.as_millis();
    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}
