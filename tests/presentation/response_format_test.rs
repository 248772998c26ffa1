use std::time::Duration;

use sibu::application::PipelineError;
use sibu::domain::{Transcript, TranscriptSegment};
use sibu::presentation::format::ResponseFormat;

fn sample_transcript() -> Transcript {
    Transcript::new(vec![
        TranscriptSegment {
            start: Duration::ZERO,
            end: Duration::from_millis(1500),
            text: " hello".to_string(),
            confidence: None,
        },
        TranscriptSegment {
            start: Duration::from_millis(1500),
            end: Duration::from_millis(3250),
            text: "world ".to_string(),
            confidence: None,
        },
    ])
}

#[test]
fn given_no_accept_header_when_negotiating_then_json_is_selected() {
    assert_eq!(ResponseFormat::from_accept(None).unwrap(), ResponseFormat::Json);
    assert_eq!(ResponseFormat::from_accept(Some("")).unwrap(), ResponseFormat::Json);
    assert_eq!(ResponseFormat::from_accept(Some("  ")).unwrap(), ResponseFormat::Json);
}

#[test]
fn given_wildcard_accept_when_negotiating_then_json_is_selected() {
    assert_eq!(ResponseFormat::from_accept(Some("*/*")).unwrap(), ResponseFormat::Json);
}

#[test]
fn given_supported_media_types_when_negotiating_then_each_maps_to_its_format() {
    assert_eq!(
        ResponseFormat::from_accept(Some("text/plain")).unwrap(),
        ResponseFormat::Text
    );
    assert_eq!(
        ResponseFormat::from_accept(Some("application/json")).unwrap(),
        ResponseFormat::Json
    );
    assert_eq!(
        ResponseFormat::from_accept(Some("application/xml")).unwrap(),
        ResponseFormat::Xml
    );
    assert_eq!(
        ResponseFormat::from_accept(Some("application/x-subrip")).unwrap(),
        ResponseFormat::Srt
    );
}

#[test]
fn given_quality_parameters_when_negotiating_then_they_are_ignored() {
    assert_eq!(
        ResponseFormat::from_accept(Some("text/plain;q=0.9")).unwrap(),
        ResponseFormat::Text
    );
    assert_eq!(
        ResponseFormat::from_accept(Some("APPLICATION/XML; charset=utf-8")).unwrap(),
        ResponseFormat::Xml
    );
}

#[test]
fn given_mixed_accept_list_when_negotiating_then_first_supported_entry_wins() {
    assert_eq!(
        ResponseFormat::from_accept(Some("application/pdf, application/json")).unwrap(),
        ResponseFormat::Json
    );
    assert_eq!(
        ResponseFormat::from_accept(Some("image/png, text/plain;q=0.5, application/xml")).unwrap(),
        ResponseFormat::Text
    );
}

#[test]
fn given_only_unsupported_types_when_negotiating_then_it_is_a_client_error() {
    let err = ResponseFormat::from_accept(Some("application/pdf")).unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedFormat(_)));
}

#[test]
fn given_text_format_when_rendering_then_segments_join_with_single_spaces() {
    let body = ResponseFormat::Text.render(&sample_transcript()).unwrap();
    assert_eq!(body, "hello world");
}

#[test]
fn given_json_format_when_rendering_then_count_matches_segments() {
    let body = ResponseFormat::Json.render(&sample_transcript()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    let data = value["data"].as_array().unwrap();
    assert_eq!(value["count"].as_u64().unwrap() as usize, data.len());
    for segment in data {
        assert!(segment["start"].as_f64().unwrap() <= segment["end"].as_f64().unwrap());
    }
    assert_eq!(data[0]["text"].as_str().unwrap(), " hello");
}

#[test]
fn given_xml_format_when_rendering_then_document_carries_count_and_text() {
    let body = ResponseFormat::Xml.render(&sample_transcript()).unwrap();
    assert!(body.starts_with("<transcript>"));
    assert!(body.contains("<count>2</count>"));
    assert!(body.contains(" hello"));
}

#[test]
fn given_each_format_then_content_type_matches() {
    assert_eq!(ResponseFormat::Json.content_type(), "application/json");
    assert_eq!(ResponseFormat::Srt.content_type(), "application/x-subrip");
    assert!(ResponseFormat::Text.content_type().starts_with("text/plain"));
    assert_eq!(ResponseFormat::Xml.content_type(), "application/xml");
}
