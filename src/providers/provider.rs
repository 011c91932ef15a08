//! LLM provider trait.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Sampling knobs for a single generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerateOptions {
    pub const fn with_max_tokens(max_tokens: u32) -> Self {
        Self {
            temperature: 0.7,
            max_tokens,
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::with_max_tokens(2000)
    }
}

/// Chat-completion style text generator.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name.
    fn name(&self) -> &str;

    /// Whether credentials are present.
    fn is_configured(&self) -> bool;

    /// Get the default model.
    fn default_model(&self) -> &str;

    /// Generate a completion from a system and a user message.
    async fn generate(&self, system: &str, user: &str, options: GenerateOptions) -> Result<String>;
}
