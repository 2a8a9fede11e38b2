use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::prompts;
use crate::errors::AppResult;
use crate::models::domain::Difficulty;
use crate::services::chat_model::ChatModel;

/// Hard cap on the characters of source text sent to the model. The cut is
/// a plain character truncation, not sentence-aware.
pub const MAX_SOURCE_CHARS: usize = 8000;

/// Options per question; the prompt demands exactly this many.
pub const OPTION_COUNT: usize = 4;

/// Upper bound on the oversampled request size.
pub const MAX_OVERSAMPLE: usize = 30;

/// Global cap on questions per quiz, applied after the per-video clamp.
pub const MAX_TOTAL_QUESTIONS: usize = 20;

/// A model-produced question that survived validation. Ordinal ids are
/// assigned later by the caller, in final sequence order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    #[error("element is not a JSON object")]
    NotAnObject,

    #[error("question text missing or not a string")]
    MissingQuestionText,

    #[error("options missing or not an array")]
    MissingOptions,

    #[error("expected exactly 4 options, got {0}")]
    WrongOptionCount(usize),

    #[error("option entry is not a string")]
    OptionNotText,

    #[error("correct_index missing or not an integer")]
    MissingCorrectIndex,

    #[error("correct_index {0} out of range")]
    CorrectIndexOutOfRange(i64),
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    questions: Vec<Value>,
}

/// The model routinely returns malformed or duplicate entries, so we request
/// more than needed and filter, instead of retrying after a shortfall.
pub fn oversample_count(target_count: usize) -> usize {
    (target_count + 3).max(target_count * 2).min(MAX_OVERSAMPLE)
}

/// Truncate to `MAX_SOURCE_CHARS` characters on a char boundary.
pub fn truncate_source(text: &str) -> &str {
    match text.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn validate_element(value: &Value) -> Result<GeneratedQuestion, QuestionValidationError> {
    let object = value
        .as_object()
        .ok_or(QuestionValidationError::NotAnObject)?;

    let question = object
        .get("question")
        .and_then(Value::as_str)
        .ok_or(QuestionValidationError::MissingQuestionText)?;

    let raw_options = object
        .get("options")
        .and_then(Value::as_array)
        .ok_or(QuestionValidationError::MissingOptions)?;
    if raw_options.len() != OPTION_COUNT {
        return Err(QuestionValidationError::WrongOptionCount(raw_options.len()));
    }

    let mut options = Vec::with_capacity(OPTION_COUNT);
    for option in raw_options {
        options.push(
            option
                .as_str()
                .ok_or(QuestionValidationError::OptionNotText)?
                .to_string(),
        );
    }

    let correct_index = object
        .get("correct_index")
        .and_then(Value::as_i64)
        .ok_or(QuestionValidationError::MissingCorrectIndex)?;
    if !(0..OPTION_COUNT as i64).contains(&correct_index) {
        return Err(QuestionValidationError::CorrectIndexOutOfRange(
            correct_index,
        ));
    }

    let explanation = object
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(GeneratedQuestion {
        question: question.to_string(),
        options,
        correct_index: correct_index as usize,
        explanation,
    })
}

/// Decode the raw model text, then validate each element independently.
/// Malformed JSON yields an empty sequence; per-element failures are kept
/// so callers can report how many were dropped and why.
pub fn parse_generated(raw: &str) -> Vec<Result<GeneratedQuestion, QuestionValidationError>> {
    let Ok(payload) = serde_json::from_str::<RawResponse>(raw) else {
        log::warn!("model response was not a valid JSON object; yielding no questions");
        return Vec::new();
    };

    payload.questions.iter().map(validate_element).collect()
}

/// Run one oversampled generation call and return at most `target_count`
/// validated questions, in model-given order. Fewer than `target_count` is a
/// degraded-but-valid outcome; only an empty result signals failure, and the
/// caller decides how to surface it.
pub async fn generate_questions(
    model: &dyn ChatModel,
    text: &str,
    target_count: usize,
    difficulty: Difficulty,
) -> AppResult<Vec<GeneratedQuestion>> {
    let source = truncate_source(text);
    let requested = oversample_count(target_count);
    let user_prompt = prompts::build_user_prompt(source, requested, difficulty);

    let raw = model.complete(prompts::SYSTEM_PROMPT, &user_prompt).await?;

    let parsed = parse_generated(&raw);
    let returned = parsed.len();

    let mut valid: Vec<GeneratedQuestion> = Vec::new();
    let mut dropped: Vec<QuestionValidationError> = Vec::new();
    for item in parsed {
        match item {
            Ok(question) => valid.push(question),
            Err(err) => dropped.push(err),
        }
    }

    if !dropped.is_empty() {
        let reasons = dropped
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        log::warn!(
            "dropped {} of {} generated questions: {}",
            dropped.len(),
            returned,
            reasons
        );
    }

    // First N in model order; no reranking.
    valid.truncate(target_count);
    Ok(valid)
}
