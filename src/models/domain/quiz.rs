use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

/// A generated quiz as held by the session store. Write-once: the record is
/// never mutated after creation and lives for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizRecord {
    pub quiz_id: String,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizRecord {
    pub fn new(questions: Vec<Question>) -> Self {
        QuizRecord {
            quiz_id: Uuid::new_v4().to_string(),
            questions,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(id: u32) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_index: 0,
            explanation: String::new(),
        }
    }

    #[test]
    fn new_record_assigns_fresh_ids() {
        let first = QuizRecord::new(vec![sample_question(0)]);
        let second = QuizRecord::new(vec![sample_question(0)]);

        assert_ne!(first.quiz_id, second.quiz_id);
        assert!(first.created_at.is_some());
    }

    #[test]
    fn record_round_trip_preserves_answer_key() {
        let record = QuizRecord::new(vec![sample_question(0), sample_question(1)]);

        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: QuizRecord = serde_json::from_str(&json).expect("record should deserialize");

        assert_eq!(parsed.questions.len(), 2);
        assert_eq!(parsed.questions[1].id, 1);
        assert_eq!(parsed.questions[0].correct_index, 0);
    }
}
