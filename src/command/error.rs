//! Parse, resolve and validation failures for command lines.

use thiserror::Error;

/// Point in the command lifecycle a line has reached.
///
/// Transitions only move forward: `Received -> Tokenized -> Resolved ->
/// Validated -> Dispatched`. A fresh input line always starts at `Received`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Received,
    Tokenized,
    Resolved,
    Validated,
    Dispatched,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Received => "received",
            Stage::Tokenized => "tokenized",
            Stage::Resolved => "resolved",
            Stage::Validated => "validated",
            Stage::Dispatched => "dispatched",
        }
    }
}

/// Everything that can go wrong before a handler is invoked.
///
/// None of these are fatal to the interactive loop; each renders as a
/// user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Malformed token: unterminated quote in `{fragment}`")]
    MalformedToken { fragment: String },

    #[error("Unexpected word `{word}`: parameters must be written as key:value")]
    BareWord { word: String },

    #[error("Parameter `{key}` has no value; write {key}:value or {key}:\"quoted value\"")]
    MissingValue { key: String },

    #[error("Unknown namespace `{namespace}`. Valid namespaces: {}", .valid.join(", "))]
    UnknownNamespace { namespace: String, valid: Vec<String> },

    #[error("Unknown action `{action}` for `{namespace}`. Valid actions: {}", .valid.join(", "))]
    UnknownAction {
        namespace: String,
        action: String,
        valid: Vec<String>,
    },

    #[error("Missing required parameter(s) for {target}: {}", .names.join(", "))]
    MissingRequiredParameter { target: String, names: Vec<String> },

    #[error("Unknown parameter `{name}` for {target}. Accepted parameters: {}", .accepted.join(", "))]
    UnknownParameter {
        target: String,
        name: String,
        accepted: Vec<String>,
    },

    #[error("Invalid value `{value}` for `{name}`. Allowed values: {}", .allowed.join(", "))]
    InvalidParameterValue {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Invalid URL `{value}` for `{name}`: must start with http:// or https://")]
    InvalidUrl { name: String, value: String },
}

impl CommandError {
    /// Last stage the line completed before this failure was detected.
    pub fn stage(&self) -> Stage {
        match self {
            CommandError::Empty
            | CommandError::MalformedToken { .. }
            | CommandError::BareWord { .. }
            | CommandError::MissingValue { .. } => Stage::Received,
            CommandError::UnknownNamespace { .. } | CommandError::UnknownAction { .. } => {
                Stage::Tokenized
            }
            CommandError::MissingRequiredParameter { .. }
            | CommandError::UnknownParameter { .. }
            | CommandError::InvalidParameterValue { .. }
            | CommandError::InvalidUrl { .. } => Stage::Resolved,
        }
    }
}
