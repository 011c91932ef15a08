//! Per-process session state threaded through every dispatch.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::command::Parameters;
use crate::config::Settings;
use crate::error::Result;
use crate::integrations::{ArcadeClient, HttpPageFetcher, PageFetcher, SocialPoster};
use crate::providers::{self, Provider};
use crate::registry::Integration;
use crate::results::ResultStore;

/// Shared product facts injected into every generation prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContext {
    pub company: Option<String>,
    pub product: Option<String>,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
    pub value_proposition: Option<String>,
}

impl ProductContext {
    pub fn is_set(&self) -> bool {
        self.fields().iter().any(|(_, v)| v.is_some()) || !self.competitors.is_empty()
    }

    /// Apply every supplied field. Returns `true` if anything changed.
    pub fn apply(&mut self, params: &Parameters) -> bool {
        let mut changed = false;
        let mut set = |slot: &mut Option<String>, key: &str| {
            if let Some(value) = params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
                *slot = Some(value.to_string());
                changed = true;
            }
        };

        set(&mut self.company, "company");
        set(&mut self.product, "product");
        set(&mut self.audience, "audience");
        set(&mut self.tone, "tone");
        set(&mut self.industry, "industry");
        set(&mut self.website, "website");
        set(&mut self.value_proposition, "value-proposition");

        if let Some(list) = params.get("competitors") {
            let competitors: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            if !competitors.is_empty() {
                self.competitors = competitors;
                changed = true;
            }
        }

        changed
    }

    fn fields(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("Company", self.company.as_deref()),
            ("Product", self.product.as_deref()),
            ("Target audience", self.audience.as_deref()),
            ("Brand tone", self.tone.as_deref()),
            ("Industry", self.industry.as_deref()),
            ("Website", self.website.as_deref()),
            ("Value proposition", self.value_proposition.as_deref()),
        ]
    }

    /// Block appended to system prompts; empty when nothing is set.
    pub fn to_prompt_block(&self) -> String {
        if !self.is_set() {
            return String::new();
        }
        let mut block = String::from("## Product Context\n");
        for (label, value) in self.fields() {
            if let Some(value) = value {
                block.push_str(&format!("- {}: {}\n", label, value));
            }
        }
        if !self.competitors.is_empty() {
            block.push_str(&format!("- Competitors: {}\n", self.competitors.join(", ")));
        }
        block
    }
}

/// Handles to the external backends. Any of them may be absent.
#[derive(Clone, Default)]
pub struct Integrations {
    pub llm: Option<Arc<dyn Provider>>,
    pub poster: Option<Arc<dyn SocialPoster>>,
    pub pages: Option<Arc<dyn PageFetcher>>,
}

impl Integrations {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let llm = providers::create_provider(settings)?;
        let poster = ArcadeClient::from_settings(&settings.arcade)?
            .map(|c| Arc::new(c) as Arc<dyn SocialPoster>);
        let pages: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new()?);

        Ok(Self {
            llm,
            poster,
            pages: Some(pages),
        })
    }

    pub fn is_ready(&self, integration: Integration) -> bool {
        match integration {
            Integration::Xai => self.llm.is_some(),
            Integration::Arcade => self.poster.is_some(),
            Integration::Pages => self.pages.is_some(),
            Integration::Composio => false,
        }
    }
}

impl std::fmt::Debug for Integrations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integrations")
            .field("llm", &self.llm.as_ref().map(|p| p.name().to_string()))
            .field("poster", &self.poster.is_some())
            .field("pages", &self.pages.is_some())
            .finish()
    }
}

/// Mutable state for one running session.
///
/// Exactly one instance exists per session and it is only ever borrowed by
/// the command currently executing.
#[derive(Debug)]
pub struct SessionState {
    pub product: ProductContext,
    pub integrations: Integrations,
    pub post_delay: Duration,
    pub results: Option<ResultStore>,
    history: Vec<String>,
    history_limit: usize,
}

impl SessionState {
    pub fn new(integrations: Integrations) -> Self {
        Self {
            product: ProductContext::default(),
            integrations,
            post_delay: Duration::from_secs(5),
            results: None,
            history: Vec::new(),
            history_limit: 100,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut session = Self::new(Integrations::from_settings(settings)?);
        session.post_delay = Duration::from_secs(settings.posting.delay_seconds);
        session.history_limit = settings.repl.history_limit;
        session.results = Some(ResultStore::new(settings.posting.results_dir()?));
        Ok(session)
    }

    pub fn with_post_delay(mut self, delay: Duration) -> Self {
        self.post_delay = delay;
        self
    }

    pub fn with_results(mut self, store: ResultStore) -> Self {
        self.results = Some(store);
        self
    }

    pub fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }

    /// The last `n` recorded lines, oldest first.
    pub fn recent_history(&self, n: usize) -> &[String] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }
}
