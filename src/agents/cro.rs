//! cro: page conversion audits and lead-gen tool planning.

use super::{
    ensure_ready, fetch_page, generate, generated, param, param_or, Generation, HandlerError,
    Outcome, Result,
};
use crate::command::Parameters;
use crate::registry::Integration;
use crate::session::SessionState;

const ROLE: &str = "a conversion rate optimization expert";

/// Raw HTML sent along with a page audit.
const HTML_EXCERPT_CHARS: usize = 15_000;

fn page_focus(action: &str) -> Option<&'static str> {
    let focus = match action {
        "page-cro" => {
            "comprehensive CRO audit covering: hero section, CTAs, social proof, trust signals, \
             copy clarity, mobile responsiveness, page speed signals"
        }
        "signup-flow" => {
            "signup flow analysis: form fields, friction points, social login options, password \
             requirements, error handling, value proposition clarity"
        }
        "onboarding" => {
            "onboarding experience review: first-time user experience, progressive disclosure, \
             time to value, activation milestones, help and guidance"
        }
        "form-cro" => {
            "form optimization: field count, labels, placeholder text, validation, layout, \
             multi-step potential, required vs optional fields"
        }
        "popup-cro" => {
            "popup and modal analysis: timing, targeting, copy, design, exit-intent, frequency, \
             value proposition"
        }
        "paywall-upgrade" => {
            "upgrade and paywall screen review: pricing clarity, feature comparison, urgency \
             elements, social proof, objection handling"
        }
        "churn-prevention" => {
            "cancel flow analysis: retention hooks, exit surveys, save offers, ease of \
             cancellation, win-back potential"
        }
        _ => return None,
    };
    Some(focus)
}

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    let tool = format!("cro:{}", action);
    let output = match (action, page_focus(action)) {
        ("free-tool-strategy", _) => free_tool_strategy(params, session).await?,
        (_, Some(focus)) => analyze_page(focus, params, session).await?,
        (other, None) => return Err(HandlerError::unknown("cro", other)),
    };
    Ok(generated(&tool, output))
}

async fn analyze_page(focus: &str, params: &Parameters, session: &SessionState) -> Result<String> {
    ensure_ready(session, Integration::Xai)?;

    let url = param(params, "url").unwrap_or_default();
    let snapshot = fetch_page(session, url).await?;

    let extra = param(params, "focus")
        .map(|f| format!("\nAdditional focus: {}", f))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Perform a {}.{}\n\
                 Structure your response with: Summary, Key Findings (with priority), \
                 Recommendations, Quick Wins.",
                focus, extra
            ),
            user: format!(
                "Analyze this page for conversion optimization:\n{}\nPage HTML (excerpt):\n{}",
                snapshot.summary(),
                snapshot.excerpt(HTML_EXCERPT_CHARS)
            ),
            max_tokens: 3000,
        },
    )
    .await
}

async fn free_tool_strategy(params: &Parameters, session: &SessionState) -> Result<String> {
    let industry = param_or(params, "industry", "");
    let goal = param_or(params, "goal", "email signups");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Plan a free tool strategy for lead generation.\nGoal: {}. Industry: {}.\n\
                 Include: 5-10 tool ideas, an effort/impact matrix, tech stack suggestions, \
                 and a distribution plan.",
                goal, industry
            ),
            user: format!("Free tool strategy for {} targeting {}", industry, goal),
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
    async fn test_page_audit_sends_snapshot_and_focus() {
        let llm = EchoProvider::replying("audit");
        let mut session = session_with(Some(llm.clone()), None);

        execute(
            "signup-flow",
            &params(&[("url", "https://acme.test/signup")]),
            &mut session,
        )
        .await
        .unwrap();

        let (system, user, options) = &llm.calls()[0];
        assert!(system.contains("Perform a signup flow analysis"));
        assert!(user.contains("URL: https://acme.test/signup"));
        assert!(user.contains("Meta description: Dashboards for data teams"));
        assert!(user.contains("<h1>See everything</h1>"));
        assert_eq!(options.max_tokens, 3000);
    }

    #[tokio::test]
    async fn test_focus_is_appended() {
        let llm = EchoProvider::replying("audit");
        let mut session = session_with(Some(llm.clone()), None);
        execute(
            "page-cro",
            &params(&[("url", "https://acme.test"), ("focus", "CTA placement")]),
            &mut session,
        )
        .await
        .unwrap();
        assert!(llm.calls()[0].0.contains("Additional focus: CTA placement"));
    }

    #[tokio::test]
    async fn test_audit_requires_llm_before_fetching() {
        let mut session = session_with(None, None);
        let err = execute("page-cro", &params(&[("url", "https://acme.test")]), &mut session)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::NotConfigured(Integration::Xai)));
    }
}
