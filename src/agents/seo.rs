//! seo: audits, programmatic pages, AI search, schema markup, competitor pages.

use super::{fetch_page, generate, generated, param, param_or, Generation, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::integrations::PageSnapshot;
use crate::session::SessionState;

const ROLE: &str = "a technical SEO specialist and content strategist";

/// Raw HTML included when a page is used as LLM context.
const PAGE_EXCERPT_CHARS: usize = 8_000;

const AUDIT_META_TAGS: &[&str] = &["description", "og:title", "og:description", "twitter:card", "robots"];

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    let tool = format!("seo:{}", action);
    let outcome = match action {
        "audit" => audit(params, session).await?,
        "programmatic" => Outcome::text(programmatic(params, session).await?),
        "ai-seo" => ai_seo(params, session).await?,
        "schema-markup" => schema_markup(params, session).await?,
        "competitor-alternatives" => competitor_alternatives(params, session).await?,
        other => return Err(HandlerError::unknown("seo", other)),
    };
    Ok(match outcome {
        Outcome::Done { output, .. } => generated(&tool, output),
        prompt @ Outcome::NeedsInput(_) => prompt,
    })
}

/// Deterministic on-page report for a snapshot.
pub fn audit_report(snapshot: &PageSnapshot) -> String {
    let mut lines = vec![
        format!("SEO Audit: {}", snapshot.url),
        format!("Title: {}", snapshot.title.as_deref().unwrap_or("N/A")),
        String::new(),
        "META TAGS:".to_string(),
    ];

    for key in AUDIT_META_TAGS {
        match snapshot.meta(key) {
            Some(value) => lines.push(format!("  {}: {} OK", key, value)),
            None => lines.push(format!("  {}: [missing] MISSING", key)),
        }
    }

    lines.push(String::new());
    lines.push("HEADINGS:".to_string());
    for level in 1..=3u8 {
        lines.push(format!("  h{}: {} found", level, snapshot.heading_count(level)));
        for heading in snapshot.headings(level).take(5) {
            lines.push(format!("    - {}", heading));
        }
    }

    let types = snapshot.json_ld_types();
    lines.push(String::new());
    lines.push(format!(
        "STRUCTURED DATA: {} JSON-LD blocks found",
        snapshot.json_ld.len()
    ));
    for t in types.iter().take(3) {
        lines.push(format!("  @type: {}", t));
    }

    lines.join("\n")
}

async fn audit(params: &Parameters, session: &SessionState) -> Result<Outcome> {
    let url = param_or(params, "url", "");
    let depth = param_or(params, "depth", "standard");

    let snapshot = fetch_page(session, url).await?;
    let mut report = audit_report(&snapshot);

    if depth != "shallow" && session.integrations.llm.is_some() {
        let analysis = generate(
            session,
            Generation {
                role: ROLE,
                instruction: "Analyze the following SEO audit data and provide prioritized \
                              recommendations.\nStructure: Critical Issues, Warnings, \
                              Opportunities, Quick Wins."
                    .to_string(),
                user: format!("SEO audit data:\n{}", report),
                max_tokens: if depth == "deep" { 3000 } else { 1500 },
            },
        )
        .await?;
        report.push_str("\n\nAI ANALYSIS:\n");
        report.push_str(&analysis);
    }

    Ok(Outcome::text(report))
}

async fn programmatic(params: &Parameters, session: &SessionState) -> Result<String> {
    let template = param_or(params, "template", "");
    let count = param_or(params, "count", "5");
    let pattern = param(params, "keyword-pattern")
        .map(|p| format!("\nKeyword pattern: {}", p))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design a programmatic SEO page template.\n\
                 Include: page structure (HTML outline), keyword mapping, meta tag templates, \
                 internal linking strategy.\nGenerate {} example pages.",
                count
            ),
            user: format!("Programmatic SEO template: {}{}", template, pattern),
            max_tokens: 3000,
        },
    )
    .await
}

/// Title and excerpt of a page, or a note when it could not be fetched.
async fn page_context(session: &SessionState, url: &str, label: &str) -> String {
    match fetch_page(session, url).await {
        Ok(snapshot) => format!(
            "\n{} title: {}\n{} excerpt: {}",
            label,
            snapshot.title.as_deref().unwrap_or("N/A"),
            label,
            snapshot.excerpt(PAGE_EXCERPT_CHARS)
        ),
        Err(e) => {
            tracing::warn!(url, "page fetch failed: {}", e);
            format!("\n(Could not fetch URL: {})", url)
        }
    }
}

async fn ai_seo(params: &Parameters, session: &SessionState) -> Result<Outcome> {
    let topic = param(params, "topic");
    let url = param(params, "url");
    let format = param_or(params, "format", "recommendations");

    let Some(subject) = topic.or(url) else {
        return Ok(Outcome::needs_input(
            "What should be optimized for AI search? Add topic:\"...\" or url:https://...",
        ));
    };

    let page = match url {
        Some(url) => page_context(session, url, "Page").await,
        None => String::new(),
    };

    let output = generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Optimize for AI search engines (Google AI Overview, ChatGPT, Perplexity).\n\
                 Focus on Answer Engine Optimization (AEO) and LLM Optimization (LLMO).\n\
                 Output format: {}.",
                format
            ),
            user: format!("Optimize for AI search: {}{}", subject, page),
            max_tokens: 3000,
        },
    )
    .await?;
    Ok(Outcome::text(output))
}

async fn schema_markup(params: &Parameters, session: &SessionState) -> Result<Outcome> {
    let action = param_or(params, "action", "generate");

    if action == "validate" {
        let Some(url) = param(params, "url") else {
            return Ok(Outcome::needs_input(
                "Which page should be validated? Add url:https://...",
            ));
        };
        return validate_schema(url, session).await.map(Outcome::text);
    }

    let Some(schema_type) = param(params, "type") else {
        return Ok(Outcome::needs_input(
            "Which schema type? (Organization, Product, FAQ, Article, SoftwareApplication, WebSite)",
        ));
    };
    let name = param(params, "name")
        .map(|n| format!(" Entity name: {}", n))
        .unwrap_or_default();

    let output = generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Generate valid JSON-LD structured data for schema.org type: {}.\n\
                 Output only the JSON-LD script tag. Use realistic placeholder values.",
                schema_type
            ),
            user: format!("Generate {} JSON-LD schema markup.{}", schema_type, name),
            max_tokens: 1500,
        },
    )
    .await?;
    Ok(Outcome::text(output))
}

async fn validate_schema(url: &str, session: &SessionState) -> Result<String> {
    let snapshot = fetch_page(session, url).await?;
    if snapshot.json_ld.is_empty() {
        return Ok(format!(
            "No JSON-LD structured data found on {}.\n\n\
             Recommendation: Add schema markup to improve search appearance.",
            url
        ));
    }

    let mut lines = vec![format!(
        "Found {} JSON-LD block(s) on {}:\n",
        snapshot.json_ld.len(),
        url
    )];
    for (i, block) in snapshot.json_ld.iter().enumerate() {
        let pretty = serde_json::from_str::<serde_json::Value>(block)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| block.clone());
        lines.push(format!("Block {}:", i + 1));
        lines.push(pretty);
        lines.push(String::new());
    }

    if session.integrations.llm.is_some() {
        let validation = generate(
            session,
            Generation {
                role: ROLE,
                instruction: "Validate the following JSON-LD structured data. Check for: \
                              completeness, correctness, recommended properties, Google rich \
                              result eligibility."
                    .to_string(),
                user: lines.join("\n"),
                max_tokens: 1500,
            },
        )
        .await?;
        lines.push(format!("VALIDATION:\n{}", validation));
    }

    Ok(lines.join("\n"))
}

async fn competitor_alternatives(params: &Parameters, session: &SessionState) -> Result<Outcome> {
    let url = param(params, "url");
    let competitors = param(params, "competitors");

    let Some(subject) = competitors.or(url) else {
        return Ok(Outcome::needs_input(
            "Which competitors? Add url: of a competitor page or competitors:\"A,B\"",
        ));
    };

    let product = param(params, "product")
        .map(str::to_string)
        .or_else(|| session.product.product.clone())
        .unwrap_or_else(|| "your product".to_string());

    let page = match url {
        Some(url) => page_context(session, url, "Competitor page").await,
        None => String::new(),
    };

    let output = generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Create competitor comparison / \"alternatives to\" SEO content.\n\
                 Include: comparison table, key differentiators, SEO-optimized headings, \
                 target keywords.\nProduct: {}.",
                product
            ),
            user: format!("Competitor comparison for: {}{}", subject, page),
            max_tokens: 3000,
        },
    )
    .await?;
    Ok(Outcome::text(output))
}
