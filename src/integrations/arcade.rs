//! Arcade.dev tool execution client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::IntegrationError;
use crate::config::ArcadeSettings;

/// Executes a named posting tool on behalf of the configured user.
#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn execute_tool(&self, tool_name: &str, input: Value) -> Result<Value, IntegrationError>;
}

pub struct ArcadeClient {
    client: Client,
    api_key: String,
    user_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    tool_name: &'a str,
    input: Value,
    user_id: &'a str,
}

#[derive(Deserialize, Default)]
struct ExecuteResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    output: Option<ExecuteOutput>,
}

#[derive(Deserialize, Default)]
struct ExecuteOutput {
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl ArcadeClient {
    /// Build a client, or `None` when the key or user id is missing.
    pub fn from_settings(settings: &ArcadeSettings) -> Result<Option<Self>, IntegrationError> {
        let (Some(api_key), Some(user_id)) = (
            settings.api_key.as_deref().filter(|k| !k.trim().is_empty()),
            settings.user_id.as_deref().filter(|u| !u.trim().is_empty()),
        ) else {
            tracing::debug!("Arcade not configured");
            return Ok(None);
        };

        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Some(Self {
            client,
            api_key: api_key.to_string(),
            user_id: user_id.to_string(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }))
    }
}

#[async_trait]
impl SocialPoster for ArcadeClient {
    async fn execute_tool(&self, tool_name: &str, input: Value) -> Result<Value, IntegrationError> {
        tracing::info!(tool = tool_name, "executing arcade tool");

        let response = self
            .client
            .post(format!("{}/v1/tools/execute", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&ExecuteRequest {
                tool_name,
                input,
                user_id: &self.user_id,
            })
            .send()
            .await
            .map_err(IntegrationError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntegrationError::Status {
                service: "arcade",
                status: status.as_u16(),
                body,
            });
        }

        let body: ExecuteResponse = response
            .json()
            .await
            .map_err(|e| IntegrationError::Parse(e.to_string()))?;
        interpret_response(body)
    }
}

fn interpret_response(body: ExecuteResponse) -> Result<Value, IntegrationError> {
    let output = body.output.unwrap_or_default();

    if let Some(error) = output.error.filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(IntegrationError::Api {
            service: "arcade",
            message,
        });
    }

    if body.success == Some(false) {
        return Err(IntegrationError::Api {
            service: "arcade",
            message: "tool execution was not successful".to_string(),
        });
    }

    Ok(output.value.unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ExecuteResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_credentials_yield_none() {
        let settings = ArcadeSettings {
            api_key: Some("key".to_string()),
            user_id: None,
            ..ArcadeSettings::default()
        };
        assert!(ArcadeClient::from_settings(&settings).unwrap().is_none());
    }

    #[test]
    fn test_success_returns_output_value() {
        let body = parse(json!({
            "success": true,
            "output": { "value": { "url": "https://x.com/i/status/1" } }
        }));
        let value = interpret_response(body).unwrap();
        assert_eq!(value["url"], "https://x.com/i/status/1");
    }

    #[test]
    fn test_output_error_is_reported() {
        let body = parse(json!({
            "success": false,
            "output": { "error": { "message": "authorization required" } }
        }));
        let err = interpret_response(body).unwrap_err();
        assert_eq!(err.to_string(), "arcade error: authorization required");
    }

    #[test]
    fn test_unsuccessful_without_detail() {
        let err = interpret_response(parse(json!({ "success": false }))).unwrap_err();
        assert!(matches!(err, IntegrationError::Api { .. }));
    }
}
