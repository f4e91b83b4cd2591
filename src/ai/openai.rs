//! Клиент OpenAI-совместимого chat-completions API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Ошибки удалённого сервиса. За пределы агента не выходят: любой
/// вариант означает откат на шаблонный ответ.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("API ключ не настроен")]
    MissingCredential,
    #[error("сеть или таймаут: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API вернул статус {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("пустой ответ от модели")]
    EmptyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Клиент для работы с OpenAI API
pub struct OpenAIClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIClient {
    /// Создаёт клиент, если в конфигурации есть непустой API ключ.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openai_api_key.clone().filter(|k| !k.is_empty())?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout_secs))
            .build()
            .ok()?;

        Some(Self {
            http,
            api_key,
            base_url: config.openai_api_base.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            max_tokens: config.openai_max_tokens,
        })
    }

    /// Отправляет промпт с системной инструкцией и возвращает текст ответа
    /// без окружающих пробелов.
    pub async fn complete(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, RemoteError> {
        if self.api_key.is_empty() {
            return Err(RemoteError::MissingCredential);
        }

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_instruction.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;

        match chat_response.choices.first() {
            Some(choice) if !choice.message.content.trim().is_empty() => {
                Ok(choice.message.content.trim().to_string())
            }
            _ => Err(RemoteError::EmptyResponse),
        }
    }

    /// Проверяет, доступен ли API ключ.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> Config {
        Config {
            openai_api_key: key.map(str::to_string),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_temperature: 0.7,
            openai_max_tokens: 500,
            openai_timeout_secs: 10,
            agent_name: "Агентик".to_string(),
            window_width: 560.0,
            window_height: 480.0,
        }
    }

    #[test]
    fn client_requires_api_key() {
        assert!(OpenAIClient::from_config(&config_with_key(None)).is_none());
        assert!(OpenAIClient::from_config(&config_with_key(Some(""))).is_none());
        assert!(OpenAIClient::from_config(&config_with_key(Some("sk-test"))).is_some());
    }

    #[test]
    fn configured_client_reports_it() {
        let client = OpenAIClient::from_config(&config_with_key(Some("sk-test"))).unwrap();
        assert!(client.is_configured());
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_network_error() {
        let mut config = config_with_key(Some("sk-test"));
        // Ни один сервис на этом порту не слушает
        config.openai_api_base = "http://127.0.0.1:9".to_string();
        config.openai_timeout_secs = 2;

        let client = OpenAIClient::from_config(&config).unwrap();
        let err = client
            .complete("привет", "Ты дружелюбный помощник.")
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Network(_)));
    }
}
