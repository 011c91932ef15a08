//! CLI commands for soco using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::command::Words;
use crate::config::{get_settings_path, load_settings_or_default, Settings};
use crate::dispatch::{Dispatcher, Status};
use crate::help;
use crate::registry::{Integration, Registry};
use crate::repl::{render, Repl};
use crate::results::ResultStore;
use crate::session::{Integrations, SessionState};

/// soco - marketing agents behind a `namespace:action key:value` console.
#[derive(Parser)]
#[command(name = "soco")]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(about = "soco - marketing command console", long_about = None)]
pub struct Commands {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the interactive console (default)
    Repl,

    /// Run a single command line and exit
    Exec {
        /// The command, e.g. content:copy topic:"Launch day"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Show help for a namespace or tool
    Help {
        /// `namespace` or `namespace:action`
        topic: Option<String>,
    },

    /// List namespaces and their readiness
    Agents,

    /// Print every completable namespace, tool and alias, or the parameter
    /// keys of one command
    Completions {
        /// `namespace:action` whose parameter keys to list
        head: Option<String>,
    },

    /// Check configuration and integrations
    Doctor,

    /// Show recent post results
    Results {
        /// Number of records to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

impl Commands {
    /// Run the command.
    pub async fn run(&self) -> Result<()> {
        match self.command.as_ref().unwrap_or(&Command::Repl) {
            Command::Repl => cmd_repl().await,
            Command::Exec { line } => cmd_exec(line).await,
            Command::Help { topic } => cmd_help(topic.as_deref()),
            Command::Agents => cmd_agents(),
            Command::Completions { head } => cmd_completions(head.as_deref()),
            Command::Doctor => cmd_doctor(),
            Command::Results { limit } => cmd_results(*limit),
        }
    }
}

// Command implementations

fn session(settings: &Settings) -> Result<SessionState> {
    Ok(SessionState::from_settings(settings)?)
}

async fn cmd_repl() -> Result<()> {
    let settings = load_settings_or_default();
    let session = session(&settings)?;
    Repl::new(Dispatcher::default(), session)
        .with_estimates(settings.repl.show_estimates)
        .run()
        .await
}

async fn cmd_exec(words: &[String]) -> Result<()> {
    let settings = load_settings_or_default();
    let mut session = session(&settings)?;
    let line = exec_line(words);

    let result = Dispatcher::default().execute_line(&line, &mut session).await;
    let text = render(&result);
    match result.status() {
        Status::Error => Err(anyhow::anyhow!(
            "{}",
            result.error_message().unwrap_or("command failed")
        )),
        _ => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Rebuild a command line from shell words.
///
/// The shell has already stripped quotes, so `topic:"Launch day"` arrives as
/// the single word `topic:Launch day`. Such words are quoted again; a word
/// that already reads as a run of `key:value` tokens (a whole quoted line)
/// is kept verbatim.
fn exec_line(words: &[String]) -> String {
    words
        .iter()
        .map(|word| requote(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn requote(word: &str) -> String {
    let mut rest = Words::new(word);
    rest.next();
    if rest.all(|w| w.is_ok_and(|w| w.split.is_some())) {
        return word.to_string();
    }
    match word.split_once(':') {
        Some((key, value)) => {
            let quote = if value.contains('"') { '\'' } else { '"' };
            format!("{}:{}{}{}", key, quote, value, quote)
        }
        None => word.to_string(),
    }
}

fn cmd_help(topic: Option<&str>) -> Result<()> {
    println!("{}", help::topic(&Registry::builtin(), topic));
    Ok(())
}

fn cmd_agents() -> Result<()> {
    let settings = load_settings_or_default();
    let integrations = Integrations::from_settings(&settings)?;
    print!("{}", help::agents(&Registry::builtin(), &integrations));
    Ok(())
}

fn cmd_completions(head: Option<&str>) -> Result<()> {
    let registry = Registry::builtin();
    let entries = match head {
        Some(head) => registry.param_completions(head),
        None => registry.completions(),
    };
    for entry in entries {
        println!("{}", entry);
    }
    Ok(())
}

fn cmd_doctor() -> Result<()> {
    println!("Running soco diagnostics...\n");

    let path = get_settings_path()?;
    if path.exists() {
        println!("Settings: {}", path.display());
    } else {
        println!("Settings: {} (not found, using defaults)", path.display());
    }

    let settings = load_settings_or_default();
    let integrations = Integrations::from_settings(&settings)?;

    println!("\nIntegrations:");
    let mut missing = Vec::new();
    for integration in [
        Integration::Xai,
        Integration::Arcade,
        Integration::Pages,
        Integration::Composio,
    ] {
        if integrations.is_ready(integration) {
            println!("  ✓ {:<9} ready", integration.name());
        } else {
            println!("  ✗ {:<9} not configured", integration.name());
            missing.push(integration);
        }
    }

    if let Some(llm) = integrations.llm.as_ref() {
        println!("\nModel: {} ({})", settings.xai.model, llm.name());
    }
    println!("Post delay: {}s", settings.posting.delay_seconds);
    println!("Post results: {}", settings.posting.results_dir()?.display());

    if !missing.is_empty() {
        println!("\nSetup:");
        for integration in missing {
            println!("   • {}: {}", integration.label(), integration.setup_hint());
        }
    }
    Ok(())
}

fn cmd_results(limit: usize) -> Result<()> {
    let settings = load_settings_or_default();
    let store = ResultStore::new(settings.posting.results_dir()?);
    let records = store.recent(limit)?;

    if records.is_empty() {
        println!("No post results in {}", store.dir().display());
        return Ok(());
    }

    for record in records {
        let outcome = if record.success {
            record.post_url.clone().unwrap_or_else(|| "posted".to_string())
        } else {
            format!("failed - {}", record.error.as_deref().unwrap_or("unknown error"))
        };
        println!(
            "{}  {:<8} {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.channel,
            outcome
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Commands::try_parse_from(["soco"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_exec_collects_words() {
        let cli = Commands::try_parse_from(["soco", "exec", "content:copy", "topic:launch"]).unwrap();
        match cli.command {
            Some(Command::Exec { line }) => assert_eq!(line, vec!["content:copy", "topic:launch"]),
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_exec_requotes_values_with_spaces() {
        use crate::command::{tokenize, Line};

        let cli = Commands::try_parse_from(["soco", "exec", "content:copy", "topic:Launch day"]).unwrap();
        let Some(Command::Exec { line }) = cli.command else {
            panic!("expected exec");
        };
        match tokenize(&exec_line(&line)).unwrap() {
            Line::Command { head, tokens } => {
                assert_eq!(head, "content:copy");
                assert_eq!(tokens[0].value, "Launch day");
            }
            other => panic!("unexpected line: {:?}", other),
        }

        assert_eq!(requote("content:say \"hi\" now"), "content:'say \"hi\" now'");
        assert_eq!(requote("content:It's done"), "content:\"It's done\"");
    }

    #[test]
    fn test_exec_keeps_a_quoted_line_verbatim() {
        let words = vec!["content:copy topic:\"Launch day\" tone:casual".to_string()];
        assert_eq!(exec_line(&words), words[0]);
        assert_eq!(exec_line(&["x:post".to_string(), "dry-run:true".to_string()]), "x:post dry-run:true");
    }

    #[test]
    fn test_completions_head() {
        let cli = Commands::try_parse_from(["soco", "completions", "x:post"]).unwrap();
        match cli.command {
            Some(Command::Completions { head }) => assert_eq!(head.as_deref(), Some("x:post")),
            _ => panic!("expected completions"),
        }
    }

    #[test]
    fn test_results_limit() {
        let cli = Commands::try_parse_from(["soco", "results", "--limit", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Results { limit: 3 })));
    }
}
