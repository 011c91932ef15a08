//! strategy: launches, pricing, referral programs, shared product context.

use serde_json::{Map, Value};

use super::{generate, generated, param, param_or, Generation, HandlerError, Outcome, Result};
use crate::command::Parameters;
use crate::session::SessionState;

const ROLE: &str = "a senior marketing strategist for software companies";

pub async fn execute(action: &str, params: &Parameters, session: &mut SessionState) -> Result<Outcome> {
    let tool = format!("strategy:{}", action);
    let output = match action {
        "product-context" => return Ok(product_context(params, session)),
        "launch" => launch(params, session).await?,
        "pricing" => pricing(params, session).await?,
        "referral" => referral(params, session).await?,
        "ideas" => ideas(params, session).await?,
        "psychology" => psychology(params, session).await?,
        other => return Err(HandlerError::unknown("strategy", other)),
    };
    Ok(generated(&tool, output))
}

/// Show the product context, or update it when any field is supplied.
fn product_context(params: &Parameters, session: &mut SessionState) -> Outcome {
    let updated = session.product.apply(params);
    if updated {
        tracing::info!("product context updated");
    }

    let mut data = Map::new();
    data.insert("updated".to_string(), Value::Bool(updated));
    if let Ok(context) = serde_json::to_value(&session.product) {
        data.insert("context".to_string(), context);
    }

    let output = match (updated, session.product.is_set()) {
        (true, _) => format!("Product context updated.\n\n{}", session.product.to_prompt_block()),
        (false, true) => session.product.to_prompt_block(),
        (false, false) => "No product context set.\n\
             Set it with: strategy:product-context company:Acme product:\"Acme Analytics\" audience:\"data teams\""
            .to_string(),
    };
    Outcome::with_data(output, data)
}

async fn launch(params: &Parameters, session: &SessionState) -> Result<String> {
    let product = param_or(params, "product", "");
    let stage = param_or(params, "stage", "full");
    let channels = param(params, "channels")
        .map(|c| format!("\nFocus channels: {}.", c))
        .unwrap_or_default();

    let scope = if stage == "full" {
        "Cover pre-launch, launch day, and post-launch phases.".to_string()
    } else {
        format!("Focus on the {} phase.", stage)
    };

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Create a product launch plan. {}{}\n\
                 Include a timeline, channel strategies, messaging, KPIs, and risk mitigation.",
                scope, channels
            ),
            user: format!("Launch plan for: {}", product),
            max_tokens: 3000,
        },
    )
    .await
}

async fn pricing(params: &Parameters, session: &SessionState) -> Result<String> {
    let product = param_or(params, "product", "");
    let model = param(params, "model")
        .map(|m| format!("\nPreferred pricing model: {}.", m))
        .unwrap_or_default();
    let competitors = param(params, "competitors")
        .map(|c| format!("\nCompetitors to position against: {}.", c))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Develop a pricing strategy: tiers, feature gates, value metric, \
                 and competitive positioning.{}{}",
                model, competitors
            ),
            user: format!("Pricing strategy for: {}", product),
            max_tokens: 3000,
        },
    )
    .await
}

async fn referral(params: &Parameters, session: &SessionState) -> Result<String> {
    let product = param_or(params, "product", "");
    let kind = param_or(params, "type", "two-sided");
    let incentive = param_or(params, "incentive", "discount");

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Design a {} referral program with {} incentives.\n\
                 Cover mechanics, incentive structure, viral loops, tracking setup, \
                 and growth projections.",
                kind, incentive
            ),
            user: format!("Referral program for: {}", product),
            max_tokens: 2000,
        },
    )
    .await
}

async fn ideas(params: &Parameters, session: &SessionState) -> Result<String> {
    let topic = param_or(params, "topic", "");
    let count = param_or(params, "count", "10");
    let channel = param(params, "channel")
        .map(|c| format!(" Focus on the {} channel.", c))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Brainstorm {} actionable marketing ideas.{}\n\
                 For each idea give a one-line description, effort (low/medium/high), \
                 and expected impact.",
                count, channel
            ),
            user: format!("Marketing ideas for: {}", topic),
            max_tokens: 3000,
        },
    )
    .await
}

async fn psychology(params: &Parameters, session: &SessionState) -> Result<String> {
    let context = param_or(params, "context", "");
    let principle = param(params, "principle")
        .map(|p| format!("Apply the {} principle.", p))
        .unwrap_or_else(|| {
            "Pick the most relevant principles (Cialdini, Kahneman, Fogg).".to_string()
        });
    let goal = param(params, "goal")
        .map(|g| format!(" Desired outcome: {}.", g))
        .unwrap_or_default();

    generate(
        session,
        Generation {
            role: ROLE,
            instruction: format!(
                "Apply marketing psychology. {}{}\n\
                 Give concrete copy and UX examples for each principle.",
                principle, goal
            ),
            user: format!("Apply psychology to: {}", context),
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

    fn output(outcome: Outcome) -> String {
        match outcome {
            Outcome::Done { output, .. } => output,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_product_context_set_then_view() {
        let mut session = session_with(None, None);

        let empty = output(execute("product-context", &params(&[]), &mut session).await.unwrap());
        assert!(empty.starts_with("No product context set."));

        let set = output(
            execute(
                "product-context",
                &params(&[("company", "Acme"), ("competitors", "Notion,Coda")]),
                &mut session,
            )
            .await
            .unwrap(),
        );
        assert!(set.starts_with("Product context updated."));
        assert_eq!(session.product.competitors, vec!["Notion", "Coda"]);

        let view = output(execute("product-context", &params(&[]), &mut session).await.unwrap());
        assert!(view.contains("- Company: Acme"));
    }

    #[tokio::test]
    async fn test_context_flows_into_later_prompts() {
        let llm = EchoProvider::replying("plan");
        let mut session = session_with(Some(llm.clone()), None);

        execute(
            "product-context",
            &params(&[("audience", "data teams")]),
            &mut session,
        )
        .await
        .unwrap();
        execute("referral", &params(&[("product", "Acme")]), &mut session)
            .await
            .unwrap();

        let (system, user, options) = &llm.calls()[0];
        assert!(system.contains("- Target audience: data teams"));
        assert!(system.contains("Design a two-sided referral program with discount incentives."));
        assert_eq!(user, "Referral program for: Acme");
        assert_eq!(options.max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let mut session = session_with(None, None);
        let err = execute("teleport", &params(&[]), &mut session).await.unwrap_err();
        assert_eq!(err.to_string(), "No handler for strategy:teleport");
    }
}
