use sibu::domain::MediaKind;

#[test]
fn given_audio_mime_when_parsing_then_returns_audio() {
    assert_eq!(MediaKind::from_mime("audio/mpeg"), Some(MediaKind::Audio));
    assert_eq!(MediaKind::from_mime("audio/wav"), Some(MediaKind::Audio));
}

#[test]
fn given_video_mime_when_parsing_then_returns_video() {
    assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
}

#[test]
fn given_non_media_mime_when_parsing_then_returns_none() {
    assert_eq!(MediaKind::from_mime("text/plain"), None);
    assert_eq!(MediaKind::from_mime("application/pdf"), None);
}

#[test]
fn given_mime_when_deriving_extension_then_uses_subtype() {
    assert_eq!(
        MediaKind::extension_from_mime("audio/mpeg"),
        Some("mpeg".to_string())
    );
    assert_eq!(
        MediaKind::extension_from_mime("audio/wav; codecs=1"),
        Some("wav".to_string())
    );
}

#[test]
fn given_odd_subtype_when_deriving_extension_then_returns_none() {
    assert_eq!(MediaKind::extension_from_mime("video/x-matroska"), None);
    assert_eq!(MediaKind::extension_from_mime("audio/"), None);
}
