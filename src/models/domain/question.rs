use serde::{Deserialize, Serialize};

/// A fully-specified multiple-choice question, including the answer key.
/// Only ever serialized for internal storage; clients receive the
/// `PublicQuestion` projection instead.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

/// Requested question difficulty. Anything absent or unrecognized maps to
/// `Mixed`, matching the API's lenient contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("easy") => Difficulty::Easy,
            Some("medium") => Difficulty::Medium,
            Some("hard") => Difficulty::Hard,
            _ => Difficulty::Mixed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Mixed => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_known_values() {
        assert_eq!(Difficulty::parse(Some("easy")), Difficulty::Easy);
        assert_eq!(Difficulty::parse(Some("Medium")), Difficulty::Medium);
        assert_eq!(Difficulty::parse(Some(" hard ")), Difficulty::Hard);
        assert_eq!(Difficulty::parse(Some("mixed")), Difficulty::Mixed);
    }

    #[test]
    fn difficulty_parse_defaults_to_mixed() {
        assert_eq!(Difficulty::parse(None), Difficulty::Mixed);
        assert_eq!(Difficulty::parse(Some("")), Difficulty::Mixed);
        assert_eq!(Difficulty::parse(Some("extreme")), Difficulty::Mixed);
    }

    #[test]
    fn question_round_trip_serialization() {
        let question = Question {
            id: 0,
            question: "What is ownership?".to_string(),
            options: vec![
                "A GC strategy".to_string(),
                "A compile-time memory discipline".to_string(),
                "A runtime borrow tracker".to_string(),
                "A linker feature".to_string(),
            ],
            correct_index: 1,
            explanation: "Ownership is enforced at compile time.".to_string(),
        };

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(question, parsed);
        assert_eq!(parsed.options.len(), 4);
    }
}
