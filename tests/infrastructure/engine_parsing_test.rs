use std::time::Duration;

use sibu::infrastructure::engine::parse_segment_line;

#[test]
fn given_segment_line_when_parsing_then_offsets_and_text_are_extracted() {
    let segment =
        parse_segment_line("[00:00:00.000 --> 00:00:02.500]   And so my fellow Americans").unwrap();

    assert_eq!(segment.start, Duration::ZERO);
    assert_eq!(segment.end, Duration::from_millis(2500));
    assert_eq!(segment.text, "And so my fellow Americans");
    assert!(segment.confidence.is_none());
}

#[test]
fn given_offsets_past_an_hour_when_parsing_then_hours_are_carried() {
    let segment = parse_segment_line("[01:02:03.450 --> 01:02:05.000] later").unwrap();

    assert_eq!(segment.start, Duration::from_millis(((62 * 60) + 3) * 1000 + 450));
    assert_eq!(segment.end, Duration::from_millis(((62 * 60) + 5) * 1000));
}

#[test]
fn given_leading_whitespace_when_parsing_then_line_still_matches() {
    assert!(parse_segment_line("  [00:00:01.000 --> 00:00:02.000] ok").is_some());
}

#[test]
fn given_non_segment_output_when_parsing_then_none_is_returned() {
    assert!(parse_segment_line("whisper_init_from_file_with_params_no_state: loading model").is_none());
    assert!(parse_segment_line("").is_none());
    assert!(parse_segment_line("[bad --> times] text").is_none());
    assert!(parse_segment_line("[00:00:00.000 -> 00:00:01.000] wrong arrow").is_none());
}

#[test]
fn given_segment_with_no_text_when_parsing_then_text_is_empty() {
    let segment = parse_segment_line("[00:00:00.000 --> 00:00:01.000]").unwrap();
    assert_eq!(segment.text, "");
}
