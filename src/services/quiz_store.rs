use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::domain::{Question, QuizRecord};

/// In-memory quiz session store. Write-once, read-many: quizzes are never
/// updated or deleted and live until process exit. Eviction is a known,
/// accepted gap.
#[derive(Default)]
pub struct QuizStore {
    quizzes: RwLock<HashMap<String, QuizRecord>>,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new quiz under a fresh opaque id and return the id. Token
    /// collisions are treated as negligible; an existing entry is never
    /// overwritten because ids are generated, not supplied.
    pub async fn create(&self, questions: Vec<Question>) -> String {
        let record = QuizRecord::new(questions);
        let quiz_id = record.quiz_id.clone();

        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(quiz_id.clone(), record);

        quiz_id
    }

    /// Look up the full question set (answer key included) for a quiz.
    /// `None` means the quiz id is unknown.
    pub async fn get(&self, quiz_id: &str) -> Option<Vec<Question>> {
        let quizzes = self.quizzes.read().await;
        quizzes.get(quiz_id).map(|record| record.questions.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn sample_questions() -> Vec<Question> {
        vec![Question {
            id: 0,
            question: "q".to_string(),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_index: 3,
            explanation: "e".to_string(),
        }]
    }

    #[tokio::test]
    async fn get_after_create_returns_stored_sequence() {
        let store = QuizStore::new();

        let quiz_id = store.create(sample_questions()).await;
        let stored = store.get(&quiz_id).await.expect("quiz should exist");

        assert_eq!(stored, sample_questions());
    }

    #[tokio::test]
    async fn unknown_id_returns_none() {
        let store = QuizStore::new();
        assert!(store.get("no-such-quiz").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_yield_distinct_ids() {
        let store = Arc::new(QuizStore::new());

        let first = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.create(sample_questions()).await })
        };
        let second = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.create(sample_questions()).await })
        };

        let first = first.await.unwrap();
        let second = second.await.unwrap();

        assert_ne!(first, second);
        assert!(store.get(&first).await.is_some());
        assert!(store.get(&second).await.is_some());
    }
}
