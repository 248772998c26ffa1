use sibu::domain::{Language, ModelError, WhisperModel};

#[test]
fn given_known_model_any_case_when_selecting_then_returns_model() {
    assert_eq!(
        WhisperModel::select("BASE", &Language::Auto).unwrap(),
        WhisperModel::Base
    );
    assert_eq!(
        WhisperModel::select(" medium ", &Language::Auto).unwrap(),
        WhisperModel::Medium
    );
}

#[test]
fn given_english_language_when_selecting_base_model_then_substitutes_english_variant() {
    assert_eq!(
        WhisperModel::select("tiny", &Language::Code("en")).unwrap(),
        WhisperModel::TinyEn
    );
    assert_eq!(
        WhisperModel::select("small", &Language::Code("en")).unwrap(),
        WhisperModel::SmallEn
    );
}

#[test]
fn given_english_language_when_selecting_large_then_keeps_large() {
    assert_eq!(
        WhisperModel::select("large", &Language::Code("en")).unwrap(),
        WhisperModel::Large
    );
}

#[test]
fn given_non_english_language_when_selecting_then_no_substitution() {
    assert_eq!(
        WhisperModel::select("base", &Language::Code("de")).unwrap(),
        WhisperModel::Base
    );
    assert_eq!(
        WhisperModel::select("base", &Language::Auto).unwrap(),
        WhisperModel::Base
    );
}

#[test]
fn given_explicit_english_variant_when_selecting_then_returns_it() {
    assert_eq!(
        WhisperModel::select("base.en", &Language::Auto).unwrap(),
        WhisperModel::BaseEn
    );
}

#[test]
fn given_unknown_model_when_selecting_then_error_lists_every_valid_name() {
    let err = WhisperModel::select("turbo", &Language::Auto).unwrap_err();
    assert!(matches!(err, ModelError::Unknown(_)));
    let message = err.to_string();
    assert!(message.contains("turbo"));
    for model in WhisperModel::ALL {
        assert!(
            message.contains(model.as_str()),
            "message should list {}: {message}",
            model.as_str()
        );
    }
}

#[test]
fn given_model_when_asking_artifact_name_then_matches_ggml_convention() {
    assert_eq!(WhisperModel::Base.artifact_name(), "ggml-base.bin");
    assert_eq!(WhisperModel::TinyEn.artifact_name(), "ggml-tiny.en.bin");
}
