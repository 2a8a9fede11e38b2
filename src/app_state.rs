use std::sync::Arc;

use crate::{
    config::Config,
    services::chat_model::OpenAiChatModel,
    services::quiz_service::QuizService,
    services::quiz_store::QuizStore,
    services::youtube::YouTubeDataApi,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http_client = reqwest::Client::new();

        let platform = Arc::new(YouTubeDataApi::new(
            http_client.clone(),
            config.youtube_api_key.clone(),
            config.transcript_language.clone(),
        ));
        let model = Arc::new(OpenAiChatModel::new(
            http_client,
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_base_url.clone(),
        ));
        let store = Arc::new(QuizStore::new());

        let quiz_service = Arc::new(QuizService::new(platform, model, store));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_test_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.openai_model, "gpt-4o-mini");
    }
}
