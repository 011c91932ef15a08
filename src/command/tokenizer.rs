//! Quote-aware tokenizer for `namespace:action key:value ...` lines.
//!
//! Handles:
//! - Whitespace splitting outside of quotes
//! - `key:value`, `key:"value with spaces"`, `key:'value with spaces'`
//! - Builtin keywords (`help`, `history`, `clear`, `exit`, `quit`, `agents`, `context`)
//!
//! A quote only opens a quoted section at the start of a word or directly
//! after the first `:`, so apostrophes inside plain values (`content:We're`)
//! stay literal.

use super::error::CommandError;

/// REPL keywords that are valid on their own, without a `namespace:action` head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    History,
    Clear,
    Exit,
    Agents,
    Context,
}

impl Builtin {
    pub const NAMES: &'static [&'static str] = &[
        "help", "history", "clear", "exit", "quit", "agents", "context",
    ];

    pub fn parse(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "help" => Some(Builtin::Help),
            "history" => Some(Builtin::History),
            "clear" => Some(Builtin::Clear),
            "exit" | "quit" => Some(Builtin::Exit),
            "agents" => Some(Builtin::Agents),
            "context" => Some(Builtin::Context),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::History => "history",
            Builtin::Clear => "clear",
            Builtin::Exit => "exit",
            Builtin::Agents => "agents",
            Builtin::Context => "context",
        }
    }
}

/// A single `key:value` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: String,
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Builtin { builtin: Builtin, args: Vec<String> },
    Command { head: String, tokens: Vec<Token> },
}

/// One whitespace-delimited word with quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// Byte offset in `text` of the first unquoted `:`.
    pub split: Option<usize>,
    /// True if the part after `split` (or the whole word) was quoted.
    pub quoted: bool,
}

/// Lazy word iterator over a raw line.
///
/// Cloning the iterator (or calling [`Words::new`] again) restarts the
/// sequence; the same input always yields the same words. After a
/// `MalformedToken` error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Result<Word, CommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let mut text = String::new();
        let mut split = None;
        let mut quoted = false;
        let mut quote: Option<char> = None;
        let mut quote_allowed = true;
        let mut end = self.input.len();

        for (offset, c) in self.input[start..].char_indices() {
            if let Some(q) = quote {
                if c == q {
                    quote = None;
                } else {
                    text.push(c);
                }
                continue;
            }

            if c.is_whitespace() {
                end = start + offset;
                break;
            }

            match c {
                '"' | '\'' if quote_allowed => {
                    quote = Some(c);
                    quoted = true;
                    quote_allowed = false;
                }
                ':' if split.is_none() => {
                    split = Some(text.len());
                    text.push(c);
                    // The value side gets its own chance at quoting.
                    quoted = false;
                    quote_allowed = true;
                }
                _ => {
                    text.push(c);
                    quote_allowed = false;
                }
            }
        }

        if quote.is_some() {
            self.pos = self.input.len();
            return Some(Err(CommandError::MalformedToken {
                fragment: self.input[start..].trim_end().to_string(),
            }));
        }

        self.pos = end;
        Some(Ok(Word {
            text,
            split,
            quoted,
        }))
    }
}

impl TryFrom<Word> for Token {
    type Error = CommandError;

    fn try_from(word: Word) -> Result<Self, Self::Error> {
        let Some(split) = word.split else {
            return Err(CommandError::BareWord { word: word.text });
        };

        let (key, value) = word.text.split_at(split);
        let value = &value[1..];

        let valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_key {
            return Err(CommandError::BareWord {
                word: word.text.clone(),
            });
        }

        if value.is_empty() && !word.quoted {
            return Err(CommandError::MissingValue {
                key: key.to_ascii_lowercase(),
            });
        }

        Ok(Token {
            key: key.to_ascii_lowercase(),
            value: value.to_string(),
        })
    }
}

/// Tokenize a raw input line.
///
/// The first word is the command head. If it is a bare builtin keyword the
/// remaining words are returned verbatim as builtin arguments; otherwise every
/// remaining word must be a `key:value` token.
pub fn tokenize(raw: &str) -> Result<Line, CommandError> {
    let mut words = Words::new(raw);

    let head = match words.next() {
        None => return Err(CommandError::Empty),
        Some(word) => word?,
    };

    if head.split.is_none() {
        if let Some(builtin) = Builtin::parse(&head.text) {
            let args = words
                .map(|w| w.map(|w| w.text))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Line::Builtin { builtin, args });
        }
    }

    let tokens = words
        .map(|w| w.and_then(Token::try_from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line::Command {
        head: head.text,
        tokens,
    })
}
