use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub youtube_api_key: SecretString,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_base_url: String,
    pub transcript_language: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            youtube_api_key: SecretString::from(
                env::var("YOUTUBE_API_KEY").unwrap_or_else(|_| "youtube_api_key".to_string()),
            ),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "openai_api_key".to_string()),
            ),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            transcript_language: env::var("TRANSCRIPT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.youtube_api_key.expose_secret() == "youtube_api_key" {
            panic!(
                "FATAL: YOUTUBE_API_KEY is using default value! Set YOUTUBE_API_KEY environment variable."
            );
        }

        if self.openai_api_key.expose_secret() == "openai_api_key" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            youtube_api_key: SecretString::from("test_youtube_key".to_string()),
            openai_api_key: SecretString::from("test_openai_key".to_string()),
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            transcript_language: "en".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
