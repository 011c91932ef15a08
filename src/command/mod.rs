//! Command line parsing: tokenize, resolve, validate.

pub mod error;
pub mod tokenizer;
pub mod validator;

pub use error::{CommandError, Stage};
pub use tokenizer::{tokenize, Builtin, Line, Token, Words};
pub use validator::{validate, Parameters};

use tracing::debug;

use crate::registry::{Registry, Target};

/// A fully resolved and validated command, ready for dispatch.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub target: Target,
    pub parameters: Parameters,
}

impl ParsedCommand {
    pub fn namespace(&self) -> &'static str {
        self.target.namespace.name
    }

    /// Canonical action name (aliases already resolved).
    pub fn action(&self) -> &'static str {
        self.target.tool.name
    }
}

/// A parsed input line.
#[derive(Debug, Clone)]
pub enum Input {
    Builtin { builtin: Builtin, args: Vec<String> },
    Command(ParsedCommand),
}

/// Resolve and validate an already tokenized command.
pub fn resolve_command(
    registry: &Registry,
    head: &str,
    tokens: Vec<Token>,
) -> Result<ParsedCommand, CommandError> {
    let target = registry.resolve(head)?;
    debug!(stage = Stage::Resolved.as_str(), target = %target.qualified_name(), "command resolved");

    let parameters = validate(&target, tokens)?;
    debug!(stage = Stage::Validated.as_str(), params = parameters.len(), "command validated");

    Ok(ParsedCommand { target, parameters })
}

/// Run a raw line through every parsing stage.
pub fn parse_line(registry: &Registry, raw: &str) -> Result<Input, CommandError> {
    match tokenize(raw)? {
        Line::Builtin { builtin, args } => Ok(Input::Builtin { builtin, args }),
        Line::Command { head, tokens } => {
            debug!(stage = Stage::Tokenized.as_str(), head = %head, tokens = tokens.len(), "line tokenized");
            resolve_command(registry, &head, tokens).map(Input::Command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(raw: &str) -> ParsedCommand {
        match parse_line(&Registry::builtin(), raw).unwrap() {
            Input::Command(cmd) => cmd,
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_alias_scenario() {
        let cmd = command("content:copy topic:\"SaaS hero\" format:headline");
        assert_eq!(cmd.namespace(), "content");
        assert_eq!(cmd.action(), "copywriting");
        assert_eq!(cmd.parameters["topic"], "SaaS hero");
        assert_eq!(cmd.parameters["format"], "headline");
        assert_eq!(cmd.parameters["tone"], "professional");
        assert_eq!(cmd.parameters.len(), 3);
    }

    #[test]
    fn test_errors_surface_from_each_stage() {
        let registry = Registry::builtin();

        let err = parse_line(&registry, "x:post content:'oops").unwrap_err();
        assert_eq!(err.stage(), Stage::Received);

        let err = parse_line(&registry, "bogus:thing").unwrap_err();
        assert!(err.to_string().contains("content, strategy, social, cro, seo, ads"));

        let err = parse_line(&registry, "seo:audit").unwrap_err();
        assert_eq!(err.stage(), Stage::Resolved);
        assert!(matches!(err, CommandError::MissingRequiredParameter { .. }));
    }

    #[test]
    fn test_builtin_lines() {
        let input = parse_line(&Registry::builtin(), "help seo:audit").unwrap();
        match input {
            Input::Builtin { builtin, args } => {
                assert_eq!(builtin, Builtin::Help);
                assert_eq!(args, vec!["seo:audit"]);
            }
            other => panic!("expected builtin, got {:?}", other),
        }
    }
}
