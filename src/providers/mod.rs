//! AI Providers module.

use std::sync::Arc;

pub mod grok;
pub mod provider;

pub use provider::{GenerateOptions, Provider, ProviderError, Result};

use crate::config::Settings;

/// Build the content-generation provider from settings.
///
/// Returns `None` when no API key is configured; handlers report that as a
/// missing integration rather than failing at startup.
pub fn create_provider(settings: &Settings) -> Result<Option<Arc<dyn Provider>>> {
    let provider = grok::GrokProvider::new(&settings.xai)?;
    if !provider.is_configured() {
        tracing::debug!("XAI provider not configured");
        return Ok(None);
    }
    Ok(Some(Arc::new(provider)))
}
