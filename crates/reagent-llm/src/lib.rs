//! Ollama-backed model client
//!
//! Non-streaming `/api/chat` transport behind the engine's
//! `ModelClient` trait. Retry policy and latency are this crate's
//! concern, not the loop's.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use reagent_core::{Message, ModelClient};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new client with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(120))
    }

    /// Create a new client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Check if Ollama is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// One non-streaming chat completion over the full history
    pub async fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let req = ChatRequest {
            model,
            messages,
            stream: false,
        };

        debug!(model, messages = messages.len(), "Sending chat request");

        let resp: ChatResponse = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .context("Failed to connect to Ollama")?
            .error_for_status()
            .context("Chat request failed")?
            .json()
            .await
            .context("Failed to parse chat response")?;

        Ok(resp.message.content)
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn invoke(&self, history: &[Message], model: &str) -> Result<String> {
        self.chat(model, history).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reagent_core::Role;

    #[test]
    fn test_chat_request_wire_shape() {
        let messages = vec![Message::system("be brief"), Message::user("hi")];
        let req = ChatRequest {
            model: "llama3.2",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_chat_response_parses_content() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"model": "llama3.2", "message": {"role": "assistant", "content": "hello"}, "done": true}"#,
        )
        .unwrap();
        assert_eq!(resp.message.content, "hello");
    }

    #[test]
    fn test_message_roles_cover_wire_values() {
        for (role, wire) in [
            (Role::System, "system"),
            (Role::User, "user"),
            (Role::Assistant, "assistant"),
        ] {
            let msg = Message {
                role,
                content: String::new(),
            };
            assert_eq!(serde_json::to_value(&msg).unwrap()["role"], wire);
        }
    }
}
