//! Namespace handlers.
//!
//! Every namespace maps to one `Handler` variant; the set is closed so the
//! dispatcher's match is checked for exhaustiveness at compile time.

pub mod ads;
pub mod channel;
pub mod content;
pub mod cro;
pub mod seo;
pub mod social;
pub mod strategy;

use chrono::Local;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::command::Parameters;
use crate::integrations::{IntegrationError, PageSnapshot};
use crate::providers::{GenerateOptions, ProviderError};
use crate::registry::Integration;
use crate::session::SessionState;
use channel::Platform;

/// What a handler produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done {
        output: String,
        data: Map<String, Value>,
    },
    /// More information is required; the string is the prompt to show.
    NeedsInput(String),
}

impl Outcome {
    pub fn text(output: impl Into<String>) -> Self {
        Outcome::Done {
            output: output.into(),
            data: Map::new(),
        }
    }

    pub fn with_data(output: impl Into<String>, data: Map<String, Value>) -> Self {
        Outcome::Done {
            output: output.into(),
            data,
        }
    }

    pub fn needs_input(prompt: impl Into<String>) -> Self {
        Outcome::NeedsInput(prompt.into())
    }
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{} is not configured. {}", .0.label(), .0.setup_hint())]
    NotConfigured(Integration),

    #[error("Generation failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("{0}")]
    Integration(#[from] IntegrationError),

    #[error("{0}")]
    Unavailable(String),

    #[error("{platform} post failed: {message}")]
    PostFailed {
        platform: &'static str,
        message: String,
    },

    #[error("No handler for {namespace}:{action}")]
    UnknownTool {
        namespace: &'static str,
        action: String,
    },
}

impl HandlerError {
    fn unknown(namespace: &'static str, action: &str) -> Self {
        HandlerError::UnknownTool {
            namespace,
            action: action.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;

/// One variant per registered namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Content,
    Strategy,
    Social,
    Cro,
    Seo,
    Ads,
    Channel(Platform),
}

impl Handler {
    /// Run `action` with already validated parameters.
    pub async fn execute(
        self,
        action: &str,
        params: &Parameters,
        session: &mut SessionState,
    ) -> Result<Outcome> {
        match self {
            Handler::Content => content::execute(action, params, session).await,
            Handler::Strategy => strategy::execute(action, params, session).await,
            Handler::Social => social::execute(action, params, session).await,
            Handler::Cro => cro::execute(action, params, session).await,
            Handler::Seo => seo::execute(action, params, session).await,
            Handler::Ads => ads::execute(action, params, session).await,
            Handler::Channel(platform) => channel::execute(platform, action, params, session).await,
        }
    }
}

/// Non-blank parameter value.
pub(crate) fn param<'a>(params: &'a Parameters, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Parameter value or a fallback when absent.
pub(crate) fn param_or<'a>(params: &'a Parameters, key: &str, fallback: &'a str) -> &'a str {
    param(params, key).unwrap_or(fallback)
}

pub(crate) fn flag(params: &Parameters, key: &str) -> bool {
    param(params, key) == Some("true")
}

/// Base persona, today's date, the product context and a task instruction.
pub(crate) fn system_prompt(role: &str, session: &SessionState, instruction: &str) -> String {
    let mut prompt = format!(
        "You are {}. Today's date is {}. Always produce content that is current and relevant. \
         Never cite outdated years or stale statistics.\n",
        role,
        Local::now().format("%Y-%m-%d")
    );
    let block = session.product.to_prompt_block();
    if !block.is_empty() {
        prompt.push('\n');
        prompt.push_str(&block);
    }
    prompt.push('\n');
    prompt.push_str(instruction);
    prompt
}

/// A single generation request.
pub(crate) struct Generation<'a> {
    pub role: &'a str,
    pub instruction: String,
    pub user: String,
    pub max_tokens: u32,
}

pub(crate) async fn generate(session: &SessionState, request: Generation<'_>) -> Result<String> {
    let llm = session
        .integrations
        .llm
        .clone()
        .ok_or(HandlerError::NotConfigured(Integration::Xai))?;

    let system = system_prompt(request.role, session, &request.instruction);
    tracing::debug!(
        provider = llm.name(),
        max_tokens = request.max_tokens,
        "generating"
    );
    let text = llm
        .generate(
            &system,
            &request.user,
            GenerateOptions::with_max_tokens(request.max_tokens),
        )
        .await?;
    Ok(text)
}

pub(crate) fn ensure_ready(session: &SessionState, integration: Integration) -> Result<()> {
    if session.integrations.is_ready(integration) {
        Ok(())
    } else {
        Err(HandlerError::NotConfigured(integration))
    }
}

pub(crate) async fn fetch_page(session: &SessionState, url: &str) -> Result<PageSnapshot> {
    let pages = session
        .integrations
        .pages
        .clone()
        .ok_or(HandlerError::NotConfigured(Integration::Pages))?;
    Ok(pages.fetch(url).await?)
}

/// `Outcome::Done` carrying the generated text and which tool produced it.
pub(crate) fn generated(tool: &str, output: String) -> Outcome {
    let mut data = Map::new();
    data.insert("tool".to_string(), Value::from(tool));
    Outcome::with_data(output, data)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fakes shared by handler and dispatcher tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::integrations::{IntegrationError, PageFetcher, PageSnapshot, SocialPoster};
    use crate::providers::{GenerateOptions, Provider, ProviderError};
    use crate::session::{Integrations, SessionState};

    /// Provider returning a fixed reply and recording prompts.
    #[derive(Default)]
    pub struct EchoProvider {
        pub reply: String,
        pub calls: Mutex<Vec<(String, String, GenerateOptions)>>,
    }

    impl EchoProvider {
        pub fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> Vec<(String, String, GenerateOptions)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn default_model(&self) -> &str {
            "echo-1"
        }

        async fn generate(
            &self,
            system: &str,
            user: &str,
            options: GenerateOptions,
        ) -> Result<String, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string(), options));
            Ok(self.reply.clone())
        }
    }

    /// Provider that always times out.
    pub struct TimeoutProvider;

    #[async_trait]
    impl Provider for TimeoutProvider {
        fn name(&self) -> &str {
            "timeout"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn default_model(&self) -> &str {
            "slow-1"
        }

        async fn generate(
            &self,
            _system: &str,
            _user: &str,
            _options: GenerateOptions,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::Timeout(90))
        }
    }

    /// Poster recording every tool call; fails for tools listed in `failing`.
    #[derive(Default)]
    pub struct RecordingPoster {
        pub calls: Mutex<Vec<(String, Value)>>,
        pub failing: Vec<&'static str>,
        pub response: Value,
    }

    impl RecordingPoster {
        pub fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SocialPoster for RecordingPoster {
        async fn execute_tool(&self, tool_name: &str, input: Value) -> Result<Value, IntegrationError> {
            self.calls
                .lock()
                .unwrap()
                .push((tool_name.to_string(), input));
            if self.failing.iter().any(|t| *t == tool_name) {
                return Err(IntegrationError::Api {
                    service: "arcade",
                    message: "authorization required".to_string(),
                });
            }
            Ok(self.response.clone())
        }
    }

    /// Fetcher serving one fixed HTML document for every URL.
    pub struct StaticPage(pub &'static str);

    #[async_trait]
    impl PageFetcher for StaticPage {
        async fn fetch(&self, url: &str) -> Result<PageSnapshot, IntegrationError> {
            crate::integrations::page::extract_snapshot(url, self.0.to_string())
        }
    }

    pub const LANDING_PAGE: &str = r#"<html><head>
<title>Acme Analytics</title>
<meta name="description" content="Dashboards for data teams">
<script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
</head><body><h1>See everything</h1><h2>Pricing</h2></body></html>"#;

    pub fn session_with(
        llm: Option<Arc<dyn Provider>>,
        poster: Option<Arc<dyn SocialPoster>>,
    ) -> SessionState {
        let pages: Arc<dyn PageFetcher> = Arc::new(StaticPage(LANDING_PAGE));
        SessionState::new(Integrations {
            llm,
            poster,
            pages: Some(pages),
        })
        .with_post_delay(std::time::Duration::ZERO)
    }
}
