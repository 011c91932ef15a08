//! Grok HTTP provider (XAI chat completions).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::{GenerateOptions, Provider, ProviderError, Result};
use crate::config::XaiSettings;

pub struct GrokProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    default_model: String,
    timeout_seconds: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<Message<'a>>,
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl GrokProvider {
    pub fn new(settings: &XaiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            default_model: settings.model.clone(),
            timeout_seconds: settings.timeout_seconds,
        })
    }

    fn get_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured("XAI_API_KEY not set".to_string()))
    }

    fn map_send_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.timeout_seconds)
        } else {
            ProviderError::HttpError(e)
        }
    }
}

#[async_trait]
impl Provider for GrokProvider {
    fn name(&self) -> &str {
        "grok"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn generate(&self, system: &str, user: &str, options: GenerateOptions) -> Result<String> {
        let api_key = self.get_api_key()?;

        let request = ChatRequest {
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            model: &self.default_model,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        tracing::debug!(
            model = %self.default_model,
            max_tokens = options.max_tokens,
            "sending chat completion"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!("HTTP {}: {}", status, text)));
        }

        // The client timeout also covers reading the body.
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        parse_chat_response(&body)
    }
}

/// First choice's message text from a chat-completions body.
fn parse_chat_response(body: &str) -> Result<String> {
    let chat_response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::ParseError(e.to_string()))?;

    chat_response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| ProviderError::ApiError("No response choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>) -> XaiSettings {
        XaiSettings {
            api_key: api_key.map(str::to_string),
            base_url: "https://api.x.ai/v1/".to_string(),
            ..XaiSettings::default()
        }
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let provider = GrokProvider::new(&settings(Some("  "))).unwrap();
        assert!(!provider.is_configured());
        assert!(matches!(
            provider.get_api_key(),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = GrokProvider::new(&settings(Some("xai-test"))).unwrap();
        assert!(provider.is_configured());
        assert_eq!(provider.base_url, "https://api.x.ai/v1");
        assert_eq!(provider.default_model(), "grok-3");
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "  Hi there \n"}}]}"#;
        assert_eq!(parse_chat_response(body).unwrap(), "Hi there");
        assert!(matches!(
            parse_chat_response(r#"{"choices": []}"#),
            Err(ProviderError::ApiError(_))
        ));
        assert!(matches!(
            parse_chat_response("{\"choices\": ["),
            Err(ProviderError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_stalled_body_is_a_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            // Headers promise a body that never fully arrives.
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"choices\"")
                .await;
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let provider = GrokProvider::new(&XaiSettings {
            api_key: Some("xai-test".to_string()),
            base_url: format!("http://{}", addr),
            timeout_seconds: 1,
            ..XaiSettings::default()
        })
        .unwrap();

        let err = provider
            .generate("sys", "hi", GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Timeout(1)), "{:?}", err);
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            messages: vec![
                Message {
                    role: "system",
                    content: "sys",
                },
                Message {
                    role: "user",
                    content: "hi",
                },
            ],
            model: "grok-3",
            temperature: 0.7,
            max_tokens: 1500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 1500);
    }
}
