//! Interactive command loop.

use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::command::{parse_line, Builtin, Input, Words};
use crate::dispatch::{Dispatcher, ExecutionResult, Status};
use crate::help;
use crate::session::SessionState;

const PROMPT: &str = "soco> ";
const HISTORY_SHOWN: usize = 10;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Whether the loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Text to print for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Continue,
        }
    }

    fn exit() -> Self {
        Self {
            text: "Goodbye!".to_string(),
            flow: Flow::Exit,
        }
    }
}

pub struct Repl {
    dispatcher: Dispatcher,
    session: SessionState,
    /// Raw line of the last command that came back NeedsInput.
    pending: Option<String>,
    show_estimates: bool,
}

impl Repl {
    pub fn new(dispatcher: Dispatcher, session: SessionState) -> Self {
        Self {
            dispatcher,
            session,
            pending: None,
            show_estimates: false,
        }
    }

    pub fn with_estimates(mut self, show: bool) -> Self {
        self.show_estimates = show;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Process one line and return what to print.
    pub async fn handle_line(&mut self, raw: &str) -> Reply {
        let line = raw.trim();
        if line.is_empty() {
            return Reply::show("");
        }

        let registry = *self.dispatcher.registry();

        // A bare namespace name shows that namespace's help.
        if let Some(ns) = registry.namespace(line) {
            self.pending = None;
            return Reply::show(help::namespace(ns));
        }

        let line = match self.pending.take() {
            Some(pending) if self.is_follow_up(&pending, line) => {
                debug!(pending = %pending, "merging follow-up parameters");
                format!("{} {}", pending, line)
            }
            _ => line.to_string(),
        };

        let command = match parse_line(&registry, &line) {
            Ok(Input::Builtin { builtin, args }) => return self.builtin(builtin, &args),
            Ok(Input::Command(command)) => command,
            Err(e) => {
                self.session.record(&line);
                return Reply::show(render(&ExecutionResult::from(e)));
            }
        };

        self.session.record(&line);
        if self.show_estimates && command.target.tool.estimated_seconds > 0 {
            eprintln!(
                "Running {} (~{}s)...",
                command.target.qualified_name(),
                command.target.tool.estimated_seconds
            );
        }

        let result = self.dispatcher.dispatch(&command, &mut self.session).await;
        if result.status() == Status::NeedsInput {
            self.pending = Some(line);
        }
        Reply::show(render(&result))
    }

    /// True when `line` should be appended to the pending command.
    ///
    /// A leading word whose key is a parameter of the pending tool always
    /// continues it, even if it also reads as `namespace:action`.
    fn is_follow_up(&self, pending: &str, line: &str) -> bool {
        let Some(Ok(first)) = Words::new(line).next() else {
            return false;
        };
        let registry = self.dispatcher.registry();
        match first.split {
            None => Builtin::parse(&first.text).is_none() && registry.resolve(&first.text).is_err(),
            Some(split) => {
                let key = first.text[..split].to_ascii_lowercase();
                let continues_pending = Words::new(pending)
                    .next()
                    .and_then(|head| head.ok())
                    .and_then(|head| registry.resolve(&head.text).ok())
                    .is_some_and(|target| target.tool.param(&key).is_some());
                continues_pending || registry.resolve(&first.text).is_err()
            }
        }
    }

    fn builtin(&mut self, builtin: Builtin, args: &[String]) -> Reply {
        self.pending = None;
        let registry = self.dispatcher.registry();
        match builtin {
            Builtin::Help => Reply::show(help::topic(registry, args.first().map(String::as_str))),
            Builtin::Agents => Reply::show(help::agents(registry, &self.session.integrations)),
            Builtin::Context => {
                let block = self.session.product.to_prompt_block();
                if block.is_empty() {
                    Reply::show(
                        "No product context set. Use strategy:product-context company:... product:...",
                    )
                } else {
                    Reply::show(block)
                }
            }
            Builtin::History => {
                let recent = self.session.recent_history(HISTORY_SHOWN);
                if recent.is_empty() {
                    return Reply::show("No command history yet.");
                }
                let mut text = String::from("Command History:");
                for (i, cmd) in recent.iter().enumerate() {
                    text.push_str(&format!("\n  {}. {}", i + 1, cmd));
                }
                Reply::show(text)
            }
            Builtin::Clear => Reply::show(CLEAR_SCREEN),
            Builtin::Exit => Reply::exit(),
        }
    }

    /// Read lines from stdin until `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        info!("repl started");
        println!("soco - marketing command console");
        println!("Type `help` for commands, `exit` to quit.\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;

            let Some(raw) = lines.next_line().await? else {
                println!();
                break;
            };

            let reply = self.handle_line(&raw).await;
            if !reply.text.is_empty() {
                println!("{}", reply.text);
            }
            if reply.flow == Flow::Exit {
                break;
            }
        }
        info!("repl stopped");
        Ok(())
    }
}

/// Terminal rendering of a result.
pub fn render(result: &ExecutionResult) -> String {
    match result.status() {
        Status::Success => result.output().to_string(),
        Status::Error => format!("Error: {}", result.error_message().unwrap_or("unknown error")),
        Status::NeedsInput => format!(
            "{}\n(Reply with the missing key:value parameters, or enter a new command.)",
            result.output()
        ),
    }
}
