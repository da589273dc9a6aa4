//! Keyword-and-quote command interpreter.

use crate::capability::domain::{CapabilityName, PAIR_SEPARATOR};
use crate::command::domain::{CommandError, ParsedCommand};

/// Recognises capability requests in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInterpreter {
    keywords: Vec<CapabilityName>,
}

impl CommandInterpreter {
    /// Creates an interpreter that recognises the given capability names.
    ///
    /// Keywords are tried in order; the first one found in the text wins.
    #[must_use]
    pub fn new(keywords: impl IntoIterator<Item = CapabilityName>) -> Self {
        Self {
            keywords: keywords.into_iter().collect(),
        }
    }

    /// Interprets `text`.
    ///
    /// Keyword matching is an ASCII case-insensitive substring search. The
    /// argument is the first quoted run; whitespace is only kept once the run
    /// holds the `|` separator, so an apostrophe in prose does not open an
    /// argument. Without a quoted run, the first bare token containing `|` is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedArguments`] when a keyword is present
    /// but no argument can be extracted, or when a quoted pair is never
    /// closed.
    pub fn parse(&self, text: &str) -> Result<ParsedCommand, CommandError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(ParsedCommand::unmatched());
        }

        let lowered = trimmed.to_ascii_lowercase();
        let Some(capability) = self
            .keywords
            .iter()
            .copied()
            .find(|keyword| lowered.contains(keyword.as_str()))
        else {
            return Ok(ParsedCommand::unmatched());
        };

        let argument = match first_quoted_run(trimmed) {
            QuotedRun::Closed(run) => Some(run),
            QuotedRun::Unterminated => None,
            QuotedRun::Absent => first_bare_pair(trimmed),
        }
        .ok_or(CommandError::MalformedArguments { capability })?;

        Ok(ParsedCommand::new(capability, vec![argument]))
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new([CapabilityName::login()])
    }
}

/// Outcome of scanning text for a quoted argument.
enum QuotedRun {
    Closed(String),
    /// A run holding the pair separator was opened but never closed.
    Unterminated,
    Absent,
}

fn first_quoted_run(text: &str) -> QuotedRun {
    let mut open: Option<char> = None;
    let mut current = String::new();

    for character in text.chars() {
        match open {
            Some(quote) if character == quote => {
                if !current.is_empty() {
                    return QuotedRun::Closed(current);
                }
                // Empty run: treat the closing quote as a fresh opening quote.
            }
            Some(_) if character.is_whitespace() && !current.contains(PAIR_SEPARATOR) => {
                // Prose such as "what's" opens a run that never holds an
                // argument; discard it and wait for the next quote.
                open = None;
                current.clear();
            }
            Some(_) => current.push(character),
            None if matches!(character, '"' | '\'') => open = Some(character),
            None => {}
        }
    }

    if current.contains(PAIR_SEPARATOR) {
        QuotedRun::Unterminated
    } else {
        QuotedRun::Absent
    }
}

fn first_bare_pair(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| token.contains(PAIR_SEPARATOR))
        .map(|token| token.trim_matches(|c: char| matches!(c, '"' | '\'' | ',' | '.')))
        .map(str::to_owned)
}
