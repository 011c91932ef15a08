//! Parameter validation against a tool's declared schema.
//!
//! Checks run in a fixed order so failures are reproducible:
//! 1. undeclared keys (strict mode)
//! 2. missing required keys, all reported together
//! 3. values outside a declared option set
//! 4. URL-typed values without an http(s) scheme
//!
//! Defaults are injected only after every check passes.

use std::collections::BTreeMap;

use super::error::CommandError;
use super::tokenizer::Token;
use crate::registry::{ParamKind, Target};

/// Validated parameters keyed by lowercase parameter name.
pub type Parameters = BTreeMap<String, String>;

pub fn validate(target: &Target, tokens: Vec<Token>) -> Result<Parameters, CommandError> {
    let tool = target.tool;

    if let Some(unknown) = tokens.iter().find(|t| tool.param(&t.key).is_none()) {
        return Err(CommandError::UnknownParameter {
            target: target.qualified_name(),
            name: unknown.key.clone(),
            accepted: tool.params.iter().map(|p| p.name.to_string()).collect(),
        });
    }

    // Last occurrence of a key wins.
    let mut params: Parameters = tokens.into_iter().map(|t| (t.key, t.value)).collect();

    let missing: Vec<String> = tool
        .required_parameters()
        .filter(|name| {
            params
                .get(*name)
                .map_or(true, |value| value.trim().is_empty())
        })
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(CommandError::MissingRequiredParameter {
            target: target.qualified_name(),
            names: missing,
        });
    }

    for spec in tool.params {
        let Some(value) = params.get(spec.name) else {
            continue;
        };

        if let Some(options) = spec.options {
            if !options.contains(&value.as_str()) {
                return Err(CommandError::InvalidParameterValue {
                    name: spec.name.to_string(),
                    value: value.clone(),
                    allowed: options.iter().map(|o| o.to_string()).collect(),
                });
            }
        }

        if spec.kind == ParamKind::Url && !is_http_url(value) {
            return Err(CommandError::InvalidUrl {
                name: spec.name.to_string(),
                value: value.clone(),
            });
        }
    }

    for spec in tool.params {
        if let Some(default) = spec.default {
            params
                .entry(spec.name.to_string())
                .or_insert_with(|| default.to_string());
        }
    }

    Ok(params)
}

pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NamespaceDescriptor, ParamSpec, Registry, ToolDescriptor};

    fn tokens(pairs: &[(&str, &str)]) -> Vec<Token> {
        pairs
            .iter()
            .map(|(k, v)| Token {
                key: k.to_string(),
                value: v.to_string(),
            })
            .collect()
    }

    const PAIR_TOOLS: &[ToolDescriptor] = &[ToolDescriptor {
        name: "pair",
        description: "test tool",
        long_help: "",
        aliases: &[],
        examples: &[],
        integrations: &[],
        params: &[
            ParamSpec::required("a", "first"),
            ParamSpec::required("b", "second"),
            ParamSpec::optional("mode", "mode").options(&["x", "y"]),
        ],
        estimated_seconds: 1,
    }];

    static PAIR_NAMESPACE: NamespaceDescriptor = NamespaceDescriptor {
        name: "test",
        description: "test namespace",
        handler: crate::agents::Handler::Content,
        tools: PAIR_TOOLS,
    };

    fn pair_target() -> Target {
        Target {
            namespace: &PAIR_NAMESPACE,
            tool: &PAIR_TOOLS[0],
        }
    }

    #[test]
    fn test_all_missing_required_reported_together() {
        let err = validate(&pair_target(), vec![]).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingRequiredParameter {
                target: "test:pair".to_string(),
                names: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn test_option_violation_lists_allowed_set() {
        let err = validate(
            &pair_target(),
            tokens(&[("a", "1"), ("b", "2"), ("mode", "z")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidParameterValue {
                name: "mode".to_string(),
                value: "z".to_string(),
                allowed: vec!["x".to_string(), "y".to_string()],
            }
        );
    }

    #[test]
    fn test_options_are_case_sensitive() {
        let err = validate(
            &pair_target(),
            tokens(&[("a", "1"), ("b", "2"), ("mode", "X")]),
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidParameterValue { .. }));
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let err = validate(&pair_target(), tokens(&[("a", "1"), ("bb", "2")])).unwrap_err();
        match err {
            CommandError::UnknownParameter { name, accepted, .. } => {
                assert_eq!(name, "bb");
                assert_eq!(accepted, vec!["a", "b", "mode"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_required_value_counts_as_missing() {
        let err = validate(&pair_target(), tokens(&[("a", "  "), ("b", "2")])).unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingRequiredParameter { names, .. } if names == vec!["a".to_string()]
        ));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let params = validate(
            &pair_target(),
            tokens(&[("a", "1"), ("b", "2"), ("a", "3")]),
        )
        .unwrap();
        assert_eq!(params["a"], "3");
    }

    #[test]
    fn test_url_parameters_need_a_scheme() {
        let target = Registry::builtin().resolve("cro:page-cro").unwrap();

        for bad in ["ftp://example.com", "example.com", "www.example.com/http://"] {
            let err = validate(&target, tokens(&[("url", bad)])).unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidUrl { .. }),
                "{} should be rejected",
                bad
            );
        }

        for good in ["https://example.com", "http://example.com"] {
            assert!(validate(&target, tokens(&[("url", good)])).is_ok());
        }
    }

    #[test]
    fn test_copywriting_defaults_injected() {
        let target = Registry::builtin().resolve("content:copy").unwrap();
        let params = validate(
            &target,
            tokens(&[("topic", "SaaS hero"), ("format", "headline")]),
        )
        .unwrap();

        let expected: Parameters = [
            ("topic", "SaaS hero"),
            ("format", "headline"),
            ("tone", "professional"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_social_post_dry_run_default() {
        let target = Registry::builtin().resolve("social:post").unwrap();
        let params = validate(&target, tokens(&[("channel", "x"), ("content", "Hello")])).unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params["channel"], "x");
        assert_eq!(params["content"], "Hello");
        assert_eq!(params["dry-run"], "false");
    }
}
