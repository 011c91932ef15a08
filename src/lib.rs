//! soco library root.

pub mod agents;
pub mod cli;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod integrations;
pub mod logging;
pub mod providers;
pub mod registry;
pub mod repl;
pub mod results;
pub mod session;

pub use cli::Commands;
pub use command::{parse_line, CommandError, Input, ParsedCommand};
pub use config::{load_settings, Settings};
pub use dispatch::{Dispatcher, ExecutionResult, Status};
pub use error::{Error, Result};
pub use providers::Provider;
pub use registry::Registry;
pub use session::SessionState;
