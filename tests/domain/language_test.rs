use sibu::domain::{Language, LanguageError};

#[test]
fn given_no_language_when_validating_then_returns_auto() {
    assert_eq!(Language::validate(None).unwrap(), Language::Auto);
}

#[test]
fn given_empty_string_when_validating_then_returns_auto() {
    assert_eq!(Language::validate(Some("   ")).unwrap(), Language::Auto);
}

#[test]
fn given_auto_with_case_and_whitespace_when_validating_then_returns_auto() {
    assert_eq!(Language::validate(Some("  AUTO ")).unwrap(), Language::Auto);
}

#[test]
fn given_two_letter_code_when_validating_then_returns_canonical_code() {
    assert_eq!(Language::validate(Some("EN")).unwrap(), Language::Code("en"));
    assert_eq!(Language::validate(Some("de")).unwrap(), Language::Code("de"));
    assert_eq!(Language::validate(Some(" ja ")).unwrap(), Language::Code("ja"));
}

#[test]
fn given_english_name_when_validating_then_returns_canonical_code() {
    assert_eq!(
        Language::validate(Some("German")).unwrap(),
        Language::Code("de")
    );
    assert_eq!(
        Language::validate(Some("FRENCH")).unwrap(),
        Language::Code("fr")
    );
}

#[test]
fn given_native_name_when_validating_then_returns_canonical_code() {
    assert_eq!(
        Language::validate(Some("Deutsch")).unwrap(),
        Language::Code("de")
    );
    assert_eq!(
        Language::validate(Some("日本語")).unwrap(),
        Language::Code("ja")
    );
}

#[test]
fn given_native_name_fragment_when_validating_then_matches_by_containment() {
    assert_eq!(
        Language::validate(Some("nederlan")).unwrap(),
        Language::Code("nl")
    );
}

#[test]
fn given_unknown_language_when_validating_then_fails() {
    let err = Language::validate(Some("klingon")).unwrap_err();
    assert!(matches!(err, LanguageError::Unknown(_)));
}

#[test]
fn given_english_code_when_resolved_then_is_english() {
    assert!(Language::validate(Some("en")).unwrap().is_english());
    assert!(!Language::validate(Some("de")).unwrap().is_english());
    assert!(!Language::Auto.is_english());
}
