//! x / linkedin: summarise a URL and post it, post directly, or preview.

use serde_json::{Map, Value};

use super::{fetch_page, flag, generate, param, Generation, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::integrations::PageSnapshot;
use crate::registry::Integration;
use crate::results::PostRecord;
use crate::session::SessionState;

/// Social platform a channel namespace posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    X,
    LinkedIn,
}

impl Platform {
    pub fn name(self) -> &'static str {
        match self {
            Platform::X => "x",
            Platform::LinkedIn => "linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    fn arcade_tool(self) -> &'static str {
        match self {
            Platform::X => "X.PostTweet",
            Platform::LinkedIn => "Linkedin.CreateTextPost",
        }
    }

    fn input_key(self) -> &'static str {
        match self {
            Platform::X => "tweet_text",
            Platform::LinkedIn => "text",
        }
    }

    /// Post body with the URL appended in the platform's style.
    pub fn format_post(self, content: &str, url: Option<&str>) -> String {
        match (url, self) {
            (None, _) => content.to_string(),
            (Some(url), _) if content.is_empty() => url.to_string(),
            (Some(url), Platform::X) => format!("{}\n\n{}", content, url),
            (Some(url), Platform::LinkedIn) => format!("{}\n\nLearn more: {}", content, url),
        }
    }

    fn summary_rules(self) -> &'static str {
        match self {
            Platform::X => {
                "Create a concise, engaging X post about the page below.\n\
                 Requirements:\n\
                 - Maximum 280 characters\n\
                 - Lead with the key takeaway\n\
                 - Use emoji sparingly and include one or two relevant hashtags\n\
                 - Do NOT include URLs (they are added separately)"
            }
            Platform::LinkedIn => {
                "Create a professional LinkedIn post about the page below.\n\
                 Requirements:\n\
                 - 2-3 paragraphs, at most 1000 characters\n\
                 - Highlight why the reader should care\n\
                 - Include relevant hashtags\n\
                 - Do NOT include URLs (they are added separately)"
            }
        }
    }

    fn summary_tokens(self) -> u32 {
        match self {
            Platform::X => 150,
            Platform::LinkedIn => 500,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Platform::X),
            "linkedin" => Some(Platform::LinkedIn),
            _ => None,
        }
    }
}

const ROLE: &str = "a professional social media manager";

pub async fn execute(
    platform: Platform,
    action: &str,
    params: &Parameters,
    session: &mut SessionState,
) -> Result<Outcome> {
    match action {
        "summarise" => {
            let url = param(params, "url").unwrap_or_default();
            let summary = summarise_url(platform, url, session).await?;
            if flag(params, "dry-run") {
                return Ok(preview(platform, &platform.format_post(&summary, Some(url))));
            }
            finish(publish(platform, &summary, Some(url), session).await)
        }
        "preview" => {
            let url = param(params, "url").unwrap_or_default();
            let summary = summarise_url(platform, url, session).await?;
            Ok(preview(platform, &platform.format_post(&summary, Some(url))))
        }
        "post" => {
            let content = param(params, "content");
            let url = param(params, "url");
            if content.is_none() && url.is_none() {
                return Ok(Outcome::needs_input(format!(
                    "What should be posted to {}? Add content:\"...\" and/or url:https://...",
                    platform.label()
                )));
            }
            let content = content.unwrap_or_default();
            if flag(params, "dry-run") {
                return Ok(preview(platform, &platform.format_post(content, url)));
            }
            finish(publish(platform, content, url, session).await)
        }
        other => Err(HandlerError::unknown(platform.name(), other)),
    }
}

async fn summarise_url(platform: Platform, url: &str, session: &SessionState) -> Result<String> {
    let snapshot = fetch_page(session, url).await?;
    summarise(platform, &snapshot, session).await
}

/// Write a platform-sized post about a fetched page.
pub(crate) async fn summarise(
    platform: Platform,
    snapshot: &PageSnapshot,
    session: &SessionState,
) -> Result<String> {
    generate(
        session,
        Generation {
            role: ROLE,
            instruction: platform.summary_rules().to_string(),
            user: snapshot.summary(),
            max_tokens: platform.summary_tokens(),
        },
    )
    .await
}

/// Outcome for a post that was rendered but not sent.
pub(crate) fn preview(platform: Platform, text: &str) -> Outcome {
    let chars = text.chars().count();
    let mut output = format!(
        "[DRY RUN] {} post preview ({} chars):\n\n{}",
        platform.label(),
        chars,
        text
    );
    if platform == Platform::X && chars > 280 {
        output.push_str("\n\nWarning: exceeds the 280 character limit for X.");
    }

    let mut data = Map::new();
    data.insert("channel".to_string(), Value::from(platform.name()));
    data.insert("content".to_string(), Value::from(text));
    data.insert("dry_run".to_string(), Value::Bool(true));
    Outcome::with_data(output, data)
}

/// Send one post and log the result. Failures are captured in the record.
pub(crate) async fn publish(
    platform: Platform,
    content: &str,
    url: Option<&str>,
    session: &SessionState,
) -> PostRecord {
    let text = platform.format_post(content, url);

    let record = match session.integrations.poster.clone() {
        None => PostRecord::failed(
            platform.name(),
            &text,
            HandlerError::NotConfigured(Integration::Arcade).to_string(),
        ),
        Some(poster) => {
            let mut input = Map::new();
            input.insert(platform.input_key().to_string(), Value::String(text.clone()));

            match poster.execute_tool(platform.arcade_tool(), Value::Object(input)).await {
                Ok(response) => {
                    let post_url = extract_post_url(&response);
                    tracing::info!(channel = platform.name(), post_url = ?post_url, "posted");
                    PostRecord::succeeded(platform.name(), &text, post_url)
                }
                Err(e) => {
                    tracing::warn!(channel = platform.name(), "post failed: {}", e);
                    PostRecord::failed(platform.name(), &text, e.to_string())
                }
            }
        }
    };

    if let Some(store) = &session.results {
        if let Err(e) = store.save(&record) {
            tracing::warn!("Failed to save post result: {}", e);
        }
    }
    record
}

/// One status line for a post record.
pub(crate) fn describe(record: &PostRecord) -> String {
    let label = Platform::from_name(&record.channel)
        .map(Platform::label)
        .unwrap_or(record.channel.as_str());
    match (record.success, &record.post_url, &record.error) {
        (true, Some(url), _) => format!("{}: posted {}", label, url),
        (true, None, _) => format!("{}: posted", label),
        (false, _, Some(error)) => format!("{}: failed - {}", label, error),
        (false, _, None) => format!("{}: failed", label),
    }
}

pub(crate) fn record_data(record: &PostRecord) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

fn finish(record: PostRecord) -> Result<Outcome> {
    if !record.success {
        let platform = Platform::from_name(&record.channel).unwrap_or(Platform::X);
        return Err(HandlerError::PostFailed {
            platform: platform.label(),
            message: record.error.unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let mut output = format!("{}\n\n{}", describe(&record), record.content);
    if record.post_url.is_none() {
        output.push_str("\n\n(no post URL returned)");
    }
    let mut data = Map::new();
    data.insert("result".to_string(), record_data(&record));
    Ok(Outcome::with_data(output, data))
}

const TOP_LEVEL_URL_KEYS: &[&str] = &["url", "post_url", "link", "permalink", "tweet_url", "status_url"];
const NESTED_URL_KEYS: &[&str] = &["url", "post_url", "link", "permalink"];
const MAX_URL_DEPTH: usize = 5;

/// Find the published post's URL in an arbitrary posting response.
pub fn extract_post_url(response: &Value) -> Option<String> {
    if let Some(map) = response.as_object() {
        for key in TOP_LEVEL_URL_KEYS {
            if let Some(url) = map.get(*key).and_then(http_str) {
                return Some(url.to_string());
            }
        }
    }
    find_url(response, 0)
}

fn find_url(value: &Value, depth: usize) -> Option<String> {
    if depth > MAX_URL_DEPTH {
        return None;
    }
    match value {
        Value::Object(map) => NESTED_URL_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(http_str))
            .map(str::to_string)
            .or_else(|| map.values().find_map(|v| find_url(v, depth + 1))),
        Value::Array(items) => items.iter().find_map(|v| find_url(v, depth + 1)),
        _ => None,
    }
}

fn http_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| s.starts_with("http"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::agents::testing::{session_with, EchoProvider, RecordingPoster};
    use crate::results::ResultStore;

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_post_per_platform() {
        assert_eq!(
            Platform::X.format_post("Hello", Some("https://a.test")),
            "Hello\n\nhttps://a.test"
        );
        assert_eq!(
            Platform::LinkedIn.format_post("Hello", Some("https://a.test")),
            "Hello\n\nLearn more: https://a.test"
        );
        assert_eq!(Platform::X.format_post("Hello", None), "Hello");
        assert_eq!(
            Platform::LinkedIn.format_post("", Some("https://a.test")),
            "https://a.test"
        );
    }

    #[test]
    fn test_extract_post_url_known_keys_first() {
        let response = json!({
            "data": { "url": "https://nested.test/1" },
            "tweet_url": "https://x.com/i/status/42"
        });
        assert_eq!(
            extract_post_url(&response).as_deref(),
            Some("https://x.com/i/status/42")
        );
    }

    #[test]
    fn test_extract_post_url_recursive() {
        let response = json!({ "result": [{ "meta": { "permalink": "https://linkedin.com/p/1" } }] });
        assert_eq!(
            extract_post_url(&response).as_deref(),
            Some("https://linkedin.com/p/1")
        );

        let not_http = json!({ "url": "urn:li:share:1" });
        assert_eq!(extract_post_url(&not_http), None);
    }

    #[test]
    fn test_extract_post_url_depth_limit() {
        let mut deep = json!({ "url": "https://deep.test" });
        for _ in 0..7 {
            deep = json!({ "next": deep });
        }
        assert_eq!(extract_post_url(&deep), None);
    }

    #[tokio::test]
    async fn test_post_without_content_or_url_needs_input() {
        let mut session = session_with(None, None);
        let outcome = execute(Platform::X, "post", &params(&[("dry-run", "false")]), &mut session)
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::NeedsInput(prompt) if prompt.contains("X")));
    }

    #[tokio::test]
    async fn test_post_sends_formatted_text_and_logs_result() {
        let dir = tempfile::tempdir().unwrap();
        let poster = Arc::new(RecordingPoster {
            response: json!({ "url": "https://linkedin.com/feed/update/1" }),
            ..RecordingPoster::default()
        });
        let mut session = session_with(None, Some(poster.clone()))
            .with_results(ResultStore::new(dir.path()));

        let outcome = execute(
            Platform::LinkedIn,
            "post",
            &params(&[("content", "We are hiring"), ("url", "https://a.test/jobs")]),
            &mut session,
        )
        .await
        .unwrap();

        let calls = poster.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Linkedin.CreateTextPost");
        assert_eq!(
            calls[0].1["text"],
            "We are hiring\n\nLearn more: https://a.test/jobs"
        );

        match outcome {
            Outcome::Done { output, .. } => {
                assert!(output.starts_with("LinkedIn: posted https://linkedin.com/feed/update/1"))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let saved = ResultStore::new(dir.path()).recent(5).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].channel, "linkedin");
        assert!(saved[0].success);
    }

    #[tokio::test]
    async fn test_post_failure_is_a_handler_error() {
        let poster = Arc::new(RecordingPoster {
            failing: vec!["X.PostTweet"],
            ..RecordingPoster::default()
        });
        let mut session = session_with(None, Some(poster));
        let err = execute(Platform::X, "post", &params(&[("content", "hi")]), &mut session)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "X post failed: arcade error: authorization required");
    }

    #[tokio::test]
    async fn test_summarise_dry_run_previews_without_posting() {
        let llm = EchoProvider::replying("Acme ships dashboards for data teams.");
        let poster = Arc::new(RecordingPoster::default());
        let mut session = session_with(Some(llm.clone()), Some(poster.clone()));

        let outcome = execute(
            Platform::X,
            "summarise",
            &params(&[("url", "https://acme.test"), ("dry-run", "true")]),
            &mut session,
        )
        .await
        .unwrap();

        assert!(poster.calls().is_empty());
        let (_, user, options) = &llm.calls()[0];
        assert!(user.contains("Title: Acme Analytics"));
        assert_eq!(options.max_tokens, 150);
        match outcome {
            Outcome::Done { output, data } => {
                assert!(output.starts_with("[DRY RUN] X post preview"));
                assert!(output.ends_with("Acme ships dashboards for data teams.\n\nhttps://acme.test"));
                assert_eq!(data["dry_run"], true);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
