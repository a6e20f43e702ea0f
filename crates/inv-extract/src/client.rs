//! Chat-completions client.

use std::thread;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::response::parse_fields;
use crate::{Extractor, Fields};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking [`Extractor`] backed by an OpenAI-compatible chat endpoint.
///
/// Transport errors, 429 and 5xx responses are retried up to
/// `max_retries` times with linearly growing delays. Other statuses fail
/// immediately.
pub struct ChatExtractor {
    client: Client,
    config: ExtractorConfig,
    api_key: String,
}

impl ChatExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(ExtractError::MissingApiKey)?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn send_once(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };
        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ExtractError::RateLimited);
        }
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json()?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractError::EmptyResponse)
    }
}

impl Extractor for ChatExtractor {
    fn extract(&self, system_prompt: &str, user_prompt: &str) -> Result<Fields> {
        let mut attempt = 0;
        loop {
            match self.send_once(system_prompt, user_prompt) {
                Ok(content) => {
                    debug!(attempt, "extraction completed");
                    return parse_fields(&content);
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.retry_backoff * attempt;
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "extraction request failed, retrying"
                    );
                    thread::sleep(delay);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_api_key() {
        let result = ChatExtractor::new(ExtractorConfig::default());
        assert!(matches!(result, Err(ExtractError::MissingApiKey)));
    }

    #[test]
    fn request_serializes_as_chat_payload() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            temperature: 0.5,
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
    }

    #[test]
    fn response_content_is_optional() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(body.choices[0].message.content.is_none());
    }
}
