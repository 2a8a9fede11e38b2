use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

const COMPLETION_TEMPERATURE: f32 = 0.2;

/// The language-model seam. One blocking completion call per quiz
/// generation; the caller expects the returned text to be a JSON object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI chat-completions client.
pub struct OpenAiChatModel {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl OpenAiChatModel {
    pub fn new(
        client: reqwest::Client,
        api_key: SecretString,
        model: String,
        base_url: String,
    ) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: COMPLETION_TEMPERATURE,
        };

        let response: ChatCompletionResponse = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| AppError::UpstreamError(format!("model request failed: {err}")))?
            .error_for_status()
            .map_err(|err| AppError::UpstreamError(format!("model request rejected: {err}")))?
            .json()
            .await
            .map_err(|err| {
                AppError::UpstreamError(format!("model returned unreadable payload: {err}"))
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::UpstreamError("model returned no completion".to_string()))?;

        Ok(content.trim().to_string())
    }
}
