//! Error types for lexing and parsing.
//!
//! Both error kinds abort the pipeline immediately: there is no partial
//! result, resynchronization, or skipping of malformed sections. The
//! library never exits the process or logs on its own; callers receive a
//! typed error and decide whether to exit, retry, or report.

use thiserror::Error;

/// A failure to tokenize the input text.
///
/// Indexes are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot begin any recognized token.
    #[error("unrecognized character {found:?} at index {index}")]
    UnrecognizedCharacter {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// A string literal whose closing quote was never found.
    #[error("unterminated string literal opened at index {index}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        index: usize,
    },
}

/// A failure of the token stream to conform to the JSON grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream ended where a value, key, or closing bracket was
    /// expected.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A token that cannot begin a value appeared where a value was
    /// expected.
    #[error("unexpected {found} where a value was expected")]
    UnexpectedToken {
        /// Description of the offending token.
        found: &'static str,
    },

    /// An object key that is not a string literal.
    #[error("object key must be a string, found {found}")]
    InvalidKey {
        /// Description of the offending token.
        found: &'static str,
    },

    /// A missing `:` between an object key and its value.
    #[error("expected ':' after object key {key:?}")]
    MissingColon {
        /// The key that was not followed by a colon.
        key: String,
    },

    /// A missing `,` or `}` after an object member.
    #[error("expected ',' or '}}' after object member, found {found}")]
    ExpectedCommaOrBrace {
        /// Description of the offending token.
        found: &'static str,
    },

    /// A missing `,` or `]` after an array element.
    #[error("expected ',' or ']' after array element, found {found}")]
    ExpectedCommaOrBracket {
        /// Description of the offending token.
        found: &'static str,
    },

    /// A digit run too large for an unsigned 64-bit integer.
    #[error("number literal {literal:?} does not fit in an unsigned 64-bit integer")]
    NumberOutOfRange {
        /// The raw digit run.
        literal: String,
    },

    /// Container nesting deeper than the configured limit.
    #[error("nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded {
        /// The limit that was exceeded.
        limit: usize,
    },

    /// Tokens left over after the top-level value.
    #[error("{count} trailing token(s) after the top-level value")]
    TrailingTokens {
        /// How many tokens were left unconsumed.
        count: usize,
    },
}

/// Any failure of the lex-then-parse pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token stream did not conform to the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
