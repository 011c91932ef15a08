//! ads: paid campaigns, experiments, tracking plans.

use super::{generate, generated, param, param_or, Generation, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::session::SessionState;

const ROLE: &str = "a performance marketing and paid acquisition specialist";

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    let tool = format!("ads:{}", action);
    let output = match action {
        "paid-ads" => paid_ads(params, session).await?,
        "ab-test" => match ab_test_description(params) {
            Some(description) => ab_test(&description, params, session).await?,
            None => {
                return Ok(Outcome::needs_input(
                    "What should be A/B tested? Add page:, element:, or hypothesis:",
                ))
            }
        },
        "analytics-tracking" => analytics_tracking(params, session).await?,
        other => return Err(HandlerError::unknown("ads", other)),
    };
    Ok(generated(&tool, output))
}

async fn paid_ads(params: &Parameters, session: &SessionState) -> Result<String> {
    let platform = param_or(params, "platform", "all");
    let goal = param_or(params, "goal", "conversions");

    let notes: Vec<String> = [
        param(params, "budget").map(|b| format!("Monthly budget: ${}", b)),
        param(params, "audience").map(|a| format!("Target audience: {}", a)),
        param(params, "product").map(|p| format!("Product: {}", p)),
    ]
    .into_iter()
    .flatten()
    .collect();
    let product = param(params, "product")
        .map(|p| format!(" Product: {}", p))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design a {} ads campaign strategy. Goal: {}.\n{}\n\
                 Include: campaign structure, ad groups, targeting, bidding strategy, \
                 creative guidelines, budget allocation, KPIs.",
                platform,
                goal,
                notes.join(" ")
            ),
            user: format!("Paid ads strategy for {}.{}", platform, product),
            max_tokens: 3000,
        },
    )
    .await
}

/// `Page: ... Element: ... Hypothesis: ...`, or `None` when nothing was given.
fn ab_test_description(params: &Parameters) -> Option<String> {
    let parts: Vec<String> = [("Page", "page"), ("Element", "element"), ("Hypothesis", "hypothesis")]
        .iter()
        .filter_map(|(label, key)| param(params, key).map(|v| format!("{}: {}", label, v)))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

async fn ab_test(description: &str, params: &Parameters, session: &SessionState) -> Result<String> {
    let variants = param_or(params, "variants", "2");
    let metric = param_or(params, "metric", "conversion-rate");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design an A/B test experiment with {} variants. Primary metric: {}.\n\
                 Include: hypothesis, control vs variant(s), sample size calculation, test \
                 duration estimate, success criteria, statistical significance threshold, \
                 and analysis plan.",
                variants, metric
            ),
            user: format!("Design A/B test: {}", description),
            max_tokens: 2000,
        },
    )
    .await
}

async fn analytics_tracking(params: &Parameters, session: &SessionState) -> Result<String> {
    let scope = param_or(params, "scope", "");
    let platform = param_or(params, "platform", "ga4");
    let events = param_or(params, "events", "recommended");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design an analytics tracking plan for {}. Scope: {}. Event type: {}.\n\
                 Include: event names, parameters, triggers, UTM conventions, data layer \
                 specifications, and implementation code snippets (GTM or direct).",
                platform, scope, events
            ),
            user: format!("Analytics tracking plan for: {}", scope),
            max_tokens: 3000,
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::{session_with, EchoProvider};

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_ab_test_without_subject_needs_input() {
        let llm = EchoProvider::replying("plan");
        let mut session = session_with(Some(llm.clone()), None);
        let outcome = execute(
            "ab-test",
            &params(&[("variants", "2"), ("metric", "conversion-rate")]),
            &mut session,
        )
        .await
        .unwrap();
        assert!(matches!(outcome, Outcome::NeedsInput(_)));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ab_test_description_joins_given_parts() {
        let llm = EchoProvider::replying("plan");
        let mut session = session_with(Some(llm.clone()), None);
        execute(
            "ab-test",
            &params(&[("page", "pricing"), ("hypothesis", "Annual toggle lifts ARPU")]),
            &mut session,
        )
        .await
        .unwrap();

        let (system, user, options) = &llm.calls()[0];
        assert_eq!(user, "Design A/B test: Page: pricing Hypothesis: Annual toggle lifts ARPU");
        assert!(system.contains("with 2 variants. Primary metric: conversion-rate."));
        assert_eq!(options.max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_paid_ads_notes() {
        let llm = EchoProvider::replying("campaign");
        let mut session = session_with(Some(llm.clone()), None);
        execute(
            "paid-ads",
            &params(&[("platform", "meta"), ("budget", "5000"), ("goal", "signups")]),
            &mut session,
        )
        .await
        .unwrap();

        let (system, user, _) = &llm.calls()[0];
        assert!(system.contains("Design a meta ads campaign strategy. Goal: signups.\nMonthly budget: $5000\n"));
        assert_eq!(user, "Paid ads strategy for meta.");
    }
}
