pub mod error;
pub mod faculty;
pub mod matching;

pub use error::{ModelError, Result};
pub use faculty::{FacultyIdentity, Registry};
pub use matching::{Alternative, ManualOverride, MatchResult, MatchStrategy, ScoredCandidate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips_through_json() {
        let registry = Registry::new(vec![
            FacultyIdentity::new("ahren-dag", "Dag", "Ahren"),
            FacultyIdentity::new("danecek-petr", "Petr", "Daněček"),
        ])
        .expect("valid registry");
        let json = serde_json::to_string(&registry).expect("serialize registry");
        assert!(json.contains("\"firstName\":\"Dag\""));
        let round: Registry = serde_json::from_str(&json).expect("deserialize registry");
        assert_eq!(round.len(), 2);
        assert_eq!(round.get("danecek-petr").map(|f| f.last_name.as_str()), Some("Daněček"));
    }

    #[test]
    fn result_serializes_null_id_for_unmatched() {
        let result = MatchResult::unmatched("Workshop Team", 0.0, Vec::new());
        let json = serde_json::to_value(&result).expect("serialize result");
        assert!(json["facultyId"].is_null());
        assert_eq!(json["strategy"], "unmatched");
    }
}
