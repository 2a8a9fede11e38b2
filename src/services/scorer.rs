use std::collections::HashMap;

use crate::models::domain::Question;
use crate::models::dto::request::AnswerItem;
use crate::models::dto::response::{QuestionResult, SubmitQuizResponse};

pub struct ScoreService;

impl ScoreService {
    /// Score submitted answers against a stored quiz.
    ///
    /// Answers whose question id is unknown are skipped: no result row, no
    /// effect on the score. `total` is the stored question count, so a
    /// partial submission lowers the percentage rather than shrinking the
    /// denominator. An out-of-range selected index never matches and simply
    /// scores as incorrect.
    pub fn score(questions: &[Question], answers: &[AnswerItem]) -> SubmitQuizResponse {
        let question_map: HashMap<u32, &Question> =
            questions.iter().map(|q| (q.id, q)).collect();

        let mut correct_count: u32 = 0;
        let mut results: Vec<QuestionResult> = Vec::new();

        for answer in answers {
            let Some(question) = question_map.get(&answer.question_id) else {
                continue;
            };

            let is_correct = answer.selected_index == question.correct_index as i64;
            if is_correct {
                correct_count += 1;
            }

            results.push(QuestionResult {
                question_id: question.id,
                correct_index: question.correct_index,
                selected_index: answer.selected_index,
                is_correct,
                explanation: question.explanation.clone(),
            });
        }

        let total = question_map.len() as u32;
        let percentage = if total > 0 {
            f64::from(correct_count) / f64::from(total) * 100.0
        } else {
            0.0
        };

        SubmitQuizResponse {
            score: correct_count,
            total,
            percentage,
            results,
        }
    }
}
