//! HTTP page snapshots for page analysis tools.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;

use super::IntegrationError;

/// Structured view of a fetched HTML page.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub url: String,
    pub title: Option<String>,
    /// `name`/`property` attribute to `content`, lowercased keys.
    pub meta: BTreeMap<String, String>,
    /// `(level, text)` for h1 through h3, in document order.
    pub headings: Vec<(u8, String)>,
    /// Raw JSON-LD script bodies.
    pub json_ld: Vec<String>,
    pub html: String,
}

impl PageSnapshot {
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    pub fn headings(&self, level: u8) -> impl Iterator<Item = &str> {
        self.headings
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
    }

    pub fn heading_count(&self, level: u8) -> usize {
        self.headings(level).count()
    }

    /// The first `max_chars` characters of the raw HTML.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.html.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.html[..idx],
            None => &self.html,
        }
    }

    /// `@type` values declared by the JSON-LD blocks, including `@graph` members.
    pub fn json_ld_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for block in &self.json_ld {
            match serde_json::from_str::<Value>(block) {
                Ok(value) => collect_types(&value, &mut types),
                Err(_) => types.push("(invalid JSON-LD)".to_string()),
            }
        }
        types
    }

    /// Compact summary used as LLM context.
    pub fn summary(&self) -> String {
        let mut out = format!("URL: {}\n", self.url);
        out.push_str(&format!(
            "Title: {}\n",
            self.title.as_deref().unwrap_or("(none)")
        ));
        if let Some(desc) = self.meta("description") {
            out.push_str(&format!("Meta description: {}\n", desc));
        }
        for (level, text) in &self.headings {
            out.push_str(&format!("H{}: {}\n", level, text));
        }
        let types = self.json_ld_types();
        if !types.is_empty() {
            out.push_str(&format!("JSON-LD types: {}\n", types.join(", ")));
        }
        out
    }
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|v| collect_types(v, out)),
        Value::Object(map) => {
            match map.get("@type") {
                Some(Value::String(t)) => out.push(t.clone()),
                Some(Value::Array(ts)) => out.extend(ts.iter().filter_map(Value::as_str).map(str::to_string)),
                _ => {}
            }
            if let Some(graph) = map.get("@graph") {
                collect_types(graph, out);
            }
        }
        _ => {}
    }
}

/// Fetches pages for analysis.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageSnapshot, IntegrationError>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self, IntegrationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("soco/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<PageSnapshot, IntegrationError> {
        tracing::debug!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(IntegrationError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntegrationError::Status {
                service: "page",
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let html = response.text().await.map_err(IntegrationError::from_send)?;
        extract_snapshot(url, html)
    }
}

// Literal patterns; compiled once on first use.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?is)<title[^>]*>(.*?)</title>"));
static META_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?is)<meta\s[^>]*>"));
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"(?is)([a-z:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?is)<h([1-3])[^>]*>(.*?)</h[1-3]\s*>"));
static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?s)<[^>]*>"));

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

/// Pull title, meta tags, headings and JSON-LD out of raw HTML.
pub fn extract_snapshot(url: &str, html: String) -> Result<PageSnapshot, IntegrationError> {
    let text = |fragment: &str| -> String {
        let stripped = TAG_RE.replace_all(fragment, " ");
        decode_entities(&stripped)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    };

    let title = TITLE_RE
        .captures(&html)
        .and_then(|c| c.get(1))
        .map(|m| text(m.as_str()))
        .filter(|t| !t.is_empty());

    let mut meta = BTreeMap::new();
    for tag in META_RE.find_iter(&html) {
        let mut key = None;
        let mut content = None;
        for attr in ATTR_RE.captures_iter(tag.as_str()) {
            let name = attr[1].to_ascii_lowercase();
            let value = attr
                .get(2)
                .or_else(|| attr.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match name.as_str() {
                "name" | "property" => key = Some(value.to_ascii_lowercase()),
                "content" => content = Some(decode_entities(value)),
                _ => {}
            }
        }
        if let (Some(key), Some(content)) = (key, content) {
            meta.entry(key).or_insert(content);
        }
    }

    let headings = HEADING_RE
        .captures_iter(&html)
        .filter_map(|c| {
            let level = c[1].parse::<u8>().ok()?;
            let body = text(&c[2]);
            (!body.is_empty()).then_some((level, body))
        })
        .collect();

    let json_ld = JSON_LD_RE
        .captures_iter(&html)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(PageSnapshot {
        url: url.to_string(),
        title,
        meta,
        headings,
        json_ld,
        html,
    })
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html><head>
  <title> Acme &amp; Co | Analytics </title>
  <meta charset="utf-8">
  <meta name="description" content="Analytics for data teams">
  <meta property="og:title" content='Acme'>
  <meta content="width=device-width" name="viewport">
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@graph": [{"@type": "Organization"}, {"@type": ["WebSite", "Thing"]}]}
  </script>
</head><body>
  <h1 class="hero">Ship <em>faster</em></h1>
  <h2>Pricing</h2><h2>FAQ</h2>
  <h3>Is there a free tier?</h3>
  <h4>ignored</h4>
</body></html>"#;

    #[test]
    fn test_extracts_title_meta_and_headings() {
        let snap = extract_snapshot("https://acme.test", PAGE.to_string()).unwrap();
        assert_eq!(snap.title.as_deref(), Some("Acme & Co | Analytics"));
        assert_eq!(snap.meta("description"), Some("Analytics for data teams"));
        assert_eq!(snap.meta("og:title"), Some("Acme"));
        assert_eq!(snap.meta("viewport"), Some("width=device-width"));
        assert_eq!(snap.heading_count(1), 1);
        assert_eq!(snap.heading_count(2), 2);
        assert_eq!(snap.heading_count(3), 1);
        assert_eq!(snap.headings(1).next(), Some("Ship faster"));
    }

    #[test]
    fn test_json_ld_types_include_graph_members() {
        let snap = extract_snapshot("https://acme.test", PAGE.to_string()).unwrap();
        assert_eq!(snap.json_ld.len(), 1);
        assert_eq!(snap.json_ld_types(), vec!["Organization", "WebSite", "Thing"]);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let snap = PageSnapshot {
            html: "héllo wörld".to_string(),
            ..PageSnapshot::default()
        };
        assert_eq!(snap.excerpt(2), "hé");
        assert_eq!(snap.excerpt(100), "héllo wörld");
    }

    #[test]
    fn test_patterns_compile_once() {
        for re in [&TITLE_RE, &META_RE, &ATTR_RE, &HEADING_RE, &JSON_LD_RE, &TAG_RE] {
            let compiled: *const Regex = LazyLock::force(re);
            assert!(std::ptr::eq(compiled, LazyLock::force(re)));
        }
    }

    #[test]
    fn test_empty_page() {
        let snap = extract_snapshot("https://empty.test", String::new()).unwrap();
        assert!(snap.title.is_none());
        assert!(snap.meta.is_empty());
        assert!(snap.json_ld_types().is_empty());
        assert!(snap.summary().contains("Title: (none)"));
    }
}
