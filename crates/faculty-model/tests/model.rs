//! Tests for faculty-model types.

use faculty_model::{
    Alternative, FacultyIdentity, MatchResult, MatchStrategy, ModelError, Registry,
    ScoredCandidate,
};

fn smith_tie() -> MatchResult {
    MatchResult::matched(
        "J. Smith",
        ScoredCandidate {
            faculty_id: "smith-jane".to_string(),
            confidence: 0.85,
            strategy: MatchStrategy::LastnameInitial,
        },
        vec![Alternative {
            faculty_id: "smith-john".to_string(),
            confidence: 0.85,
            strategy: MatchStrategy::LastnameInitial,
        }],
    )
}

#[test]
fn registry_rejects_duplicate_ids() {
    let err = Registry::new(vec![
        FacultyIdentity::new("smith-john", "John", "Smith"),
        FacultyIdentity::new("smith-john", "Johnny", "Smith"),
    ])
    .unwrap_err();
    assert_eq!(err, ModelError::DuplicateFacultyId("smith-john".to_string()));
}

#[test]
fn registry_rejects_blank_ids() {
    let err = Registry::new(vec![FacultyIdentity::new("  ", "Dag", "Ahren")]).unwrap_err();
    assert!(matches!(err, ModelError::EmptyFacultyId { .. }));
    assert!(err.to_string().contains("Dag Ahren"));
}

#[test]
fn registry_deserialization_validates() {
    let json = r#"[
        {"id": "ahren-dag", "firstName": "Dag", "lastName": "Ahren"},
        {"id": "ahren-dag", "firstName": "Dag", "lastName": "Ahrén"}
    ]"#;
    let parsed: Result<Registry, _> = serde_json::from_str(json);
    assert!(parsed.is_err());
}

#[test]
fn registry_keeps_supplied_order() {
    let registry = Registry::new(vec![
        FacultyIdentity::new("b", "Bea", "Beta"),
        FacultyIdentity::new("a", "Al", "Alpha"),
    ])
    .unwrap();
    let ids: Vec<&str> = registry.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(registry.contains("a"));
    assert!(!registry.contains("c"));
}

#[test]
fn full_name_joins_with_single_space() {
    let faculty = FacultyIdentity::new("montoliu-nerin-merce", "Mercè", "Montoliu-Nerin");
    assert_eq!(faculty.full_name(), "Mercè Montoliu-Nerin");
}

#[test]
fn strategy_tiers_are_strictly_ordered() {
    let tiers: Vec<u8> = MatchStrategy::ALL.iter().map(|s| s.tier()).collect();
    assert_eq!(tiers, vec![5, 4, 3, 2, 1, 0, 0]);
    assert!(MatchStrategy::Fuzzy.is_match());
    assert!(!MatchStrategy::Unmatched.is_match());
}

#[test]
fn strategy_serializes_snake_case() {
    let json = serde_json::to_string(&MatchStrategy::LastnameInitial).unwrap();
    assert_eq!(json, "\"lastname_initial\"");
    assert_eq!(MatchStrategy::InvalidInput.to_string(), "invalid_input");
}

#[test]
fn tie_is_reported_as_ambiguous() {
    let result = smith_tie();
    assert!(result.is_ambiguous());
    assert_eq!(result.tied_ids(), vec!["smith-jane", "smith-john"]);
}

#[test]
fn override_and_invalid_results_are_not_ambiguous() {
    let overridden = MatchResult::overridden("Dag Ahrén", "ahren-dag");
    assert!(overridden.is_matched());
    assert!(!overridden.is_ambiguous());
    assert_eq!(overridden.confidence, 1.0);

    let invalid = MatchResult::invalid("");
    assert!(!invalid.is_matched());
    assert!(invalid.tied_ids().is_empty());
}

#[test]
fn result_camel_case_on_the_wire() {
    let json = serde_json::to_value(smith_tie()).unwrap();
    assert_eq!(json["facultyId"], "smith-jane");
    assert_eq!(json["alternatives"][0]["facultyId"], "smith-john");
}
