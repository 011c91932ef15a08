//! social: post to one or all platforms.

use serde_json::{Map, Value};

use super::channel::{self, Platform};
use super::{flag, param, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::session::SessionState;

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    match action {
        "post" => post(params, session).await,
        "schedule" | "analytics" => Err(HandlerError::Unavailable(format!(
            "social:{} is not yet implemented (requires the Composio backend)",
            action
        ))),
        other => Err(HandlerError::unknown("social", other)),
    }
}

async fn post(params: &Parameters, session: &SessionState) -> Result<Outcome> {
    let content = param(params, "content").unwrap_or_default();
    let url = param(params, "url");
    let dry_run = flag(params, "dry-run");

    let platforms: &[Platform] = match param(params, "channel") {
        Some("all") => &[Platform::X, Platform::LinkedIn],
        Some("linkedin" | "li") => &[Platform::LinkedIn],
        // "x" or "twitter"
        _ => &[Platform::X],
    };

    if let [platform] = platforms {
        let mut outcome = if dry_run {
            channel::preview(*platform, &platform.format_post(content, url))
        } else {
            let record = channel::publish(*platform, content, url, session).await;
            if !record.success {
                return Err(HandlerError::PostFailed {
                    platform: platform.label(),
                    message: record.error.unwrap_or_else(|| "unknown error".to_string()),
                });
            }
            let mut data = Map::new();
            data.insert("result".to_string(), channel::record_data(&record));
            Outcome::with_data(channel::describe(&record), data)
        };
        if let Outcome::Done { data, .. } = &mut outcome {
            data.insert("channel".to_string(), Value::from(platform.name()));
        }
        return Ok(outcome);
    }

    // Every platform in turn; one failing does not stop the next.
    let mut lines = Vec::with_capacity(platforms.len());
    let mut results = Vec::with_capacity(platforms.len());
    for (i, platform) in platforms.iter().enumerate() {
        if dry_run {
            let text = platform.format_post(content, url);
            lines.push(format!("--- {} ---\n{}", platform.label(), text));
            continue;
        }
        if i > 0 && !session.post_delay.is_zero() {
            tracing::debug!("waiting {:?} before posting to {}", session.post_delay, platform.name());
            tokio::time::sleep(session.post_delay).await;
        }
        let record = channel::publish(*platform, content, url, session).await;
        lines.push(channel::describe(&record));
        results.push(channel::record_data(&record));
    }

    let mut data = Map::new();
    data.insert("channel".to_string(), Value::from("all"));
    data.insert("dry_run".to_string(), Value::Bool(dry_run));
    let output = if dry_run {
        format!("[DRY RUN] Posts that would be published:\n\n{}", lines.join("\n\n"))
    } else {
        data.insert("results".to_string(), Value::Array(results));
        lines.join("\n")
    };
    Ok(Outcome::with_data(output, data))
}
