use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question},
    models::dto::request::{GenerateQuizRequest, SubmitQuizRequest},
    models::dto::response::{GenerateQuizResponse, PublicQuestion, SubmitQuizResponse},
    services::chat_model::ChatModel,
    services::content_collector,
    services::quiz_generator::{self, MAX_TOTAL_QUESTIONS},
    services::quiz_store::QuizStore,
    services::scorer::ScoreService,
    services::url_resolver,
    services::youtube::VideoPlatform,
};

pub struct QuizService {
    platform: Arc<dyn VideoPlatform>,
    model: Arc<dyn ChatModel>,
    store: Arc<QuizStore>,
}

impl QuizService {
    pub fn new(
        platform: Arc<dyn VideoPlatform>,
        model: Arc<dyn ChatModel>,
        store: Arc<QuizStore>,
    ) -> Self {
        Self {
            platform,
            model,
            store,
        }
    }

    /// Generate a quiz from a playlist or single-video URL: resolve the URL,
    /// collect per-video text, run one generation call, store the answer key
    /// and return the public projection.
    pub async fn generate_quiz(
        &self,
        request: GenerateQuizRequest,
    ) -> AppResult<GenerateQuizResponse> {
        request.validate()?;

        let raw_url = request.playlist_url.trim();
        if raw_url.is_empty() {
            return Err(AppError::InvalidUrl(
                "Please provide a YouTube playlist or video URL.".to_string(),
            ));
        }

        let questions_per_video = request.questions_per_video();
        let max_videos = request.max_videos();

        // Playlist takes precedence: a watch URL inside a playlist context is
        // still treated as a playlist.
        let video_ids = if let Some(playlist_id) = url_resolver::resolve_playlist_id(raw_url) {
            let ids = self
                .platform
                .list_playlist_videos(&playlist_id, max_videos)
                .await?;
            if ids.is_empty() {
                return Err(AppError::NotFound(
                    "No videos found in this playlist.".to_string(),
                ));
            }
            ids
        } else if let Some(video_id) = url_resolver::resolve_video_id(raw_url) {
            vec![video_id]
        } else {
            return Err(AppError::InvalidUrl(
                "Invalid YouTube playlist or video URL. Please check the link.".to_string(),
            ));
        };

        let texts = content_collector::collect_texts(self.platform.as_ref(), video_ids).await?;
        if texts.is_empty() {
            return Err(AppError::NoUsableContent(
                "Could not gather any usable text from this URL. \
                 The video(s) may have very little transcript or description."
                    .to_string(),
            ));
        }

        let combined_text = texts.join("\n\n");
        let target_count = (questions_per_video * texts.len()).clamp(1, MAX_TOTAL_QUESTIONS);
        let difficulty = Difficulty::parse(request.difficulty.as_deref());

        let generated = quiz_generator::generate_questions(
            self.model.as_ref(),
            &combined_text,
            target_count,
            difficulty,
        )
        .await?;

        if generated.is_empty() {
            return Err(AppError::GenerationFailed(
                "The AI could not generate questions from this content. Try a different link."
                    .to_string(),
            ));
        }

        let questions: Vec<Question> = generated
            .into_iter()
            .enumerate()
            .map(|(idx, q)| Question {
                id: idx as u32,
                question: q.question,
                options: q.options,
                correct_index: q.correct_index,
                explanation: q.explanation,
            })
            .collect();

        let public_questions: Vec<PublicQuestion> =
            questions.iter().map(PublicQuestion::from).collect();

        let quiz_id = self.store.create(questions).await;
        log::info!(
            "created quiz {quiz_id} with {} questions",
            public_questions.len()
        );

        Ok(GenerateQuizResponse {
            quiz_id,
            questions: public_questions,
        })
    }

    /// Score a submission against the stored answer key.
    pub async fn submit_quiz(&self, request: SubmitQuizRequest) -> AppResult<SubmitQuizResponse> {
        request.validate()?;

        let questions = self
            .store
            .get(&request.quiz_id)
            .await
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        Ok(ScoreService::score(&questions, &request.answers))
    }
}
