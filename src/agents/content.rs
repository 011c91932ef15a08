//! content: copywriting, editing, social posts, email sequences.

use super::{generate, generated, param, param_or, Generation, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::session::SessionState;

const ROLE: &str = "an expert marketing copywriter and content strategist";

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    let tool = format!("content:{}", action);
    let output = match action {
        "copywriting" => copywriting(params, session).await?,
        "copy-editing" => copy_editing(params, session).await?,
        "social-content" => social_content(params, session).await?,
        "email-sequence" => email_sequence(params, session).await?,
        "cold-email" => cold_email(params, session).await?,
        "ad-creative" => ad_creative(params, session).await?,
        "content-strategy" => content_strategy(params, session).await?,
        other => return Err(HandlerError::unknown("content", other)),
    };
    Ok(generated(&tool, output))
}

async fn copywriting(params: &Parameters, session: &SessionState) -> Result<String> {
    let topic = param_or(params, "topic", "");
    let format = param_or(params, "format", "paragraph");
    let tone = param_or(params, "tone", "professional");
    let platform = param_or(params, "platform", "web");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Generate {} format marketing copy. Tone: {}. Target platform: {}.",
                format, tone, platform
            ),
            user: format!("Write marketing copy about: {}", topic),
            max_tokens: 1500,
        },
    )
    .await
}

async fn copy_editing(params: &Parameters, session: &SessionState) -> Result<String> {
    let input = param_or(params, "input", "");
    let goal = param_or(params, "goal", "all");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "You are reviewing and improving existing copy. Focus: {}.\n\
                 Provide the improved version followed by a brief explanation of changes.",
                goal
            ),
            user: format!("Improve this copy:\n\n{}", input),
            max_tokens: 1500,
        },
    )
    .await
}

async fn social_content(params: &Parameters, session: &SessionState) -> Result<String> {
    let topic = param_or(params, "topic", "");
    let tone = param_or(params, "tone", "professional");
    let platforms: &[&str] = match param_or(params, "platform", "x") {
        "both" => &["x", "linkedin"],
        "linkedin" => &["linkedin"],
        _ => &["x"],
    };

    let mut sections = Vec::with_capacity(platforms.len());
    for platform in platforms {
        let constraint = if *platform == "x" {
            "Maximum 280 characters. Punchy and engaging."
        } else {
            "2-3 paragraphs. Professional LinkedIn style."
        };
        let post = generate(
            session,
            Generation {
                role: ROLE,
                instruction: format!(
                    "Generate a {} social media post. {} Tone: {}.\nInclude relevant hashtags.",
                    platform.to_uppercase(),
                    constraint,
                    tone
                ),
                user: format!("Write a social post about: {}", topic),
                max_tokens: 1500,
            },
        )
        .await?;
        sections.push(format!("--- {} ---\n{}", platform.to_uppercase(), post));
    }
    Ok(sections.join("\n\n"))
}

async fn email_sequence(params: &Parameters, session: &SessionState) -> Result<String> {
    let kind = param_or(params, "type", "onboarding");
    let topic = param(params, "topic").unwrap_or(kind);
    let steps = param_or(params, "steps", "5");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design a {}-step {} email sequence.\n\
                 For each email include: subject line, preview text, body copy, CTA, \
                 and recommended send timing.",
                steps, kind
            ),
            user: format!("Create an email sequence for: {}", topic),
            max_tokens: 3000,
        },
    )
    .await
}

async fn cold_email(params: &Parameters, session: &SessionState) -> Result<String> {
    let target = param_or(params, "target", "");
    let steps = param_or(params, "steps", "3");
    let tone = param_or(params, "tone", "professional");
    let product = param(params, "product")
        .map(|p| format!(" Product: {}.", p))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Write a {}-step B2B cold email sequence. Tone: {}.\nTarget: {}.{}\n\
                 Include personalization placeholders like {{first_name}}, {{company}}.\n\
                 For each email: subject line, body, CTA. Include follow-up timing.",
                steps, tone, target, product
            ),
            user: format!("Cold email sequence targeting: {}", target),
            max_tokens: 3000,
        },
    )
    .await
}

async fn ad_creative(params: &Parameters, session: &SessionState) -> Result<String> {
    let topic = param_or(params, "topic", "");
    let platform = param_or(params, "platform", "google");
    let format = param_or(params, "format", "standard");
    let audience = param(params, "audience")
        .map(|a| format!("\nTarget audience: {}", a))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Generate {} ad creative for {} Ads.{}\n\
                 Include multiple headline variants, descriptions, and CTAs.\n\
                 Follow {} ad specs and character limits.",
                format, platform, audience, platform
            ),
            user: format!("Create ad creative for: {}", topic),
            max_tokens: 1500,
        },
    )
    .await
}

async fn content_strategy(params: &Parameters, session: &SessionState) -> Result<String> {
    let topic = param_or(params, "topic", "");
    let months = param_or(params, "months", "3");
    let focus = match param_or(params, "format", "strategy") {
        "calendar" => {
            "Provide a month-by-month content calendar with specific post topics, formats, and channels."
        }
        "clusters" => {
            "Provide topic clusters with pillar content and supporting articles, including keyword targets."
        }
        _ => {
            "Provide a comprehensive content strategy with goals, audience analysis, topic clusters, \
             keywords, and distribution channels."
        }
    };

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!("{}\nPlanning horizon: {} months.", focus, months),
            user: format!("Content strategy for: {}", topic),
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
    async fn test_copywriting_prompt_carries_format_tone_and_context() {
        let llm = EchoProvider::replying("Ship faster.");
        let mut session = session_with(Some(llm.clone()), None);
        session.product.company = Some("Acme".to_string());

        let outcome = execute(
            "copywriting",
            &params(&[("topic", "SaaS hero"), ("format", "headline"), ("tone", "professional")]),
            &mut session,
        )
        .await
        .unwrap();

        match outcome {
            Outcome::Done { output, data } => {
                assert_eq!(output, "Ship faster.");
                assert_eq!(data["tool"], "content:copywriting");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        let (system, user, options) = &calls[0];
        assert!(system.contains("Generate headline format marketing copy. Tone: professional."));
        assert!(system.contains("- Company: Acme"));
        assert!(system.contains("Today's date is"));
        assert_eq!(user, "Write marketing copy about: SaaS hero");
        assert_eq!(options.max_tokens, 1500);
        assert!((options.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_social_content_both_generates_per_platform() {
        let llm = EchoProvider::replying("post");
        let mut session = session_with(Some(llm.clone()), None);

        let outcome = execute(
            "social-content",
            &params(&[("topic", "launch"), ("platform", "both")]),
            &mut session,
        )
        .await
        .unwrap();

        assert_eq!(llm.calls().len(), 2);
        match outcome {
            Outcome::Done { output, .. } => {
                assert_eq!(output, "--- X ---\npost\n\n--- LINKEDIN ---\npost");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_long_form_tools_use_larger_budget() {
        let llm = EchoProvider::replying("seq");
        let mut session = session_with(Some(llm.clone()), None);
        execute("email-sequence", &params(&[]), &mut session)
            .await
            .unwrap();

        let (system, user, options) = &llm.calls()[0];
        assert!(system.contains("Design a 5-step onboarding email sequence."));
        assert_eq!(user, "Create an email sequence for: onboarding");
        assert_eq!(options.max_tokens, 3000);
    }

    #[tokio::test]
    async fn test_missing_llm_is_not_configured() {
        let mut session = session_with(None, None);
        let err = execute("copywriting", &params(&[("topic", "x")]), &mut session)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::NotConfigured(_)));
        assert!(err.to_string().contains("XAI_API_KEY"));
    }
}
