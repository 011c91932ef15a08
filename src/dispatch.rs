//! Handler dispatch and the uniform result envelope.

use std::time::Instant;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::agents::Outcome;
use crate::command::{parse_line, CommandError, Input, ParsedCommand, Stage};
use crate::registry::Registry;
use crate::session::SessionState;

/// Terminal state of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
    NeedsInput,
}

/// Outcome of a single dispatch. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    status: Status,
    output: String,
    data: Map<String, Value>,
    error_message: Option<String>,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            status: Status::Success,
            output: output.into(),
            data,
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            output: String::new(),
            data: Map::new(),
            error_message: Some(message.into()),
        }
    }

    pub fn needs_input(prompt: impl Into<String>) -> Self {
        Self {
            status: Status::NeedsInput,
            output: prompt.into(),
            data: Map::new(),
            error_message: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl From<CommandError> for ExecutionResult {
    fn from(err: CommandError) -> Self {
        let mut result = ExecutionResult::error(err.to_string());
        result
            .data
            .insert("stage".to_string(), Value::from(err.stage().as_str()));
        result
    }
}

/// Routes validated commands to their namespace handler.
///
/// Holds no per-command state: a NeedsInput result is answered by the caller
/// issuing a fresh, augmented command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Invoke the handler exactly once and normalize whatever it returns.
    pub async fn dispatch(&self, command: &ParsedCommand, session: &mut SessionState) -> ExecutionResult {
        let target = command.target.qualified_name();
        info!(target = %target, "dispatching");
        let started = Instant::now();

        let outcome = command
            .target
            .namespace
            .handler
            .execute(command.action(), &command.parameters, session)
            .await;

        let result = match outcome {
            Ok(Outcome::Done { output, data }) => ExecutionResult::success(output, data),
            Ok(Outcome::NeedsInput(prompt)) => ExecutionResult::needs_input(prompt),
            Err(e) => {
                warn!(target = %target, "handler failed: {}", e);
                ExecutionResult::error(e.to_string())
            }
        };

        debug!(
            stage = Stage::Dispatched.as_str(),
            target = %target,
            status = ?result.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dispatch finished"
        );
        result
    }

    /// Parse, validate and dispatch one raw command line.
    ///
    /// Builtins are rejected here; they only make sense in the interactive loop.
    pub async fn execute_line(&self, raw: &str, session: &mut SessionState) -> ExecutionResult {
        debug!(stage = Stage::Received.as_str(), line = raw, "line received");
        match parse_line(&self.registry, raw) {
            Ok(Input::Command(command)) => self.dispatch(&command, session).await,
            Ok(Input::Builtin { builtin, .. }) => ExecutionResult::error(format!(
                "`{}` is an interactive command; start `soco repl` to use it",
                builtin.name()
            )),
            Err(e) => {
                debug!(stage = e.stage().as_str(), "command rejected: {}", e);
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::agents::testing::{session_with, EchoProvider, RecordingPoster, TimeoutProvider};

    #[tokio::test]
    async fn test_copy_alias_dispatches_to_copywriting() {
        let llm = EchoProvider::replying("Headline!");
        let mut session = session_with(Some(llm.clone()), None);

        let result = Dispatcher::default()
            .execute_line("content:copy topic:\"SaaS hero\" format:headline", &mut session)
            .await;

        assert_eq!(result.status(), Status::Success);
        assert_eq!(result.output(), "Headline!");
        assert_eq!(result.data()["tool"], "content:copywriting");
        assert_eq!(result.error_message(), None);

        let (system, user, _) = &llm.calls()[0];
        assert!(system.contains("Tone: professional"));
        assert_eq!(user, "Write marketing copy about: SaaS hero");
    }

    #[tokio::test]
    async fn test_social_post_receives_default_dry_run() {
        let poster = Arc::new(RecordingPoster::default());
        let mut session = session_with(None, Some(poster.clone()));

        let dispatcher = Dispatcher::default();
        let command = match parse_line(dispatcher.registry(), "social:post channel:x content:\"Hello\"").unwrap() {
            Input::Command(command) => command,
            other => panic!("expected command, got {:?}", other),
        };
        assert_eq!(command.parameters["dry-run"], "false");

        let result = dispatcher.dispatch(&command, &mut session).await;
        assert_eq!(result.status(), Status::Success);

        let calls = poster.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1["tweet_text"], "Hello");
    }

    #[tokio::test]
    async fn test_channel_aliases_pass_validation() {
        let poster = Arc::new(RecordingPoster::default());
        let mut session = session_with(None, Some(poster.clone()));
        let dispatcher = Dispatcher::default();

        let result = dispatcher
            .execute_line("social:post channel:twitter content:hi", &mut session)
            .await;
        assert_eq!(result.status(), Status::Success);
        let result = dispatcher
            .execute_line("social:post channel:li content:hi", &mut session)
            .await;
        assert_eq!(result.status(), Status::Success);

        let tools: Vec<_> = poster.calls().into_iter().map(|(tool, _)| tool).collect();
        assert_eq!(tools, ["X.PostTweet", "Linkedin.CreateTextPost"]);
    }

    #[tokio::test]
    async fn test_upstream_timeout_becomes_error_result() {
        crate::logging::init_test();
        let mut session = session_with(Some(Arc::new(TimeoutProvider)), None);
        let dispatcher = Dispatcher::default();

        let result = dispatcher
            .execute_line("content:copy topic:launch", &mut session)
            .await;
        assert_eq!(result.status(), Status::Error);
        assert_eq!(
            result.error_message(),
            Some("Generation failed: Request timed out after 90s")
        );

        // The next command is processed normally.
        let next = dispatcher
            .execute_line("strategy:ctx company:Acme", &mut session)
            .await;
        assert_eq!(next.status(), Status::Success);
    }

    #[tokio::test]
    async fn test_parse_failures_become_error_results() {
        let mut session = session_with(None, None);
        let dispatcher = Dispatcher::default();

        let result = dispatcher.execute_line("bogus:thing", &mut session).await;
        assert_eq!(result.status(), Status::Error);
        let message = result.error_message().unwrap();
        for ns in ["content", "strategy", "social", "cro", "seo", "ads", "x", "linkedin"] {
            assert!(message.contains(ns), "{} missing from {}", ns, message);
        }
        assert_eq!(result.data()["stage"], "tokenized");

        let result = dispatcher
            .execute_line("x:post content:\"unterminated", &mut session)
            .await;
        assert!(result.error_message().unwrap().contains("content:\"unterminated"));
    }

    #[tokio::test]
    async fn test_needs_input_passes_through() {
        let mut session = session_with(None, None);
        let result = Dispatcher::default()
            .execute_line("linkedin:post", &mut session)
            .await;
        assert_eq!(result.status(), Status::NeedsInput);
        assert!(result.output().contains("LinkedIn"));
    }

    #[tokio::test]
    async fn test_builtins_are_rejected_outside_the_repl() {
        let mut session = session_with(None, None);
        let result = Dispatcher::default().execute_line("history", &mut session).await;
        assert_eq!(result.status(), Status::Error);
    }
}
