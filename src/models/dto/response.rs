use serde::Serialize;

use crate::models::domain::Question;

/// The answer-free projection of a stored question. This is the only view of
/// question data that leaves the server before submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        PublicQuestion {
            id: question.id,
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizResponse {
    pub quiz_id: String,
    pub questions: Vec<PublicQuestion>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: u32,
    pub correct_index: usize,
    pub selected_index: i64,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub results: Vec<QuestionResult>,
}
