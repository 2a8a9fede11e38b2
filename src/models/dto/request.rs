use serde::Deserialize;
use validator::Validate;

fn default_questions_per_video() -> i64 {
    2
}

fn default_max_videos() -> i64 {
    3
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, message = "Please provide a YouTube playlist or video URL."))]
    pub playlist_url: String,

    #[serde(default = "default_questions_per_video")]
    pub questions_per_video: i64,

    #[serde(default = "default_max_videos")]
    pub max_videos: i64,

    #[serde(default)]
    pub difficulty: Option<String>,
}

impl GenerateQuizRequest {
    /// Questions requested per usable video, clamped to 1-3.
    pub fn questions_per_video(&self) -> usize {
        self.questions_per_video.clamp(1, 3) as usize
    }

    /// Maximum number of videos to pull from a playlist, clamped to 1-5.
    pub fn max_videos(&self) -> usize {
        self.max_videos.clamp(1, 5) as usize
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    pub question_id: u32,
    // Deliberately not range-checked against the option count; an
    // out-of-range index scores as incorrect rather than being rejected.
    pub selected_index: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "quizId must not be empty."))]
    pub quiz_id: String,

    #[serde(default)]
    pub answers: Vec<AnswerItem>,
}
