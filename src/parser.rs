//! Recursive descent JSON parser.
//!
//! Consumes the token sequence produced by the lexer and builds a
//! [`JsonValue`] tree. Parsing is three mutually recursive rules (value,
//! object, array); recursion depth mirrors the nesting depth of the
//! input and is bounded by [`Limits::max_depth`].
//!
//! Duplicate object keys follow last-write-wins: the value from the most
//! recent occurrence is retained, while the key keeps its first-seen
//! position in the member order.

use crate::error::{Error, ParseError};
use crate::lexer::{lex, Token};
use crate::limits::Limits;
use crate::value::JsonValue;
use indexmap::IndexMap;

/// Recursive descent parser over an immutable token sequence.
///
/// The parser only ever consumes tokens from the front; [`remaining`]
/// exposes the unconsumed tail.
///
/// [`remaining`]: Parser::remaining
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    limits: Limits,
}

impl<'t> Parser<'t> {
    /// Create a parser positioned at the front of `tokens`.
    pub fn new(tokens: &'t [Token], limits: Limits) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            limits,
        }
    }

    /// The unconsumed tail of the token sequence.
    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.pos..]
    }

    /// Look at the next token without consuming it.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token.
    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse a single JSON value, leaving any following tokens unconsumed.
    pub fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        match self.bump() {
            None => Err(ParseError::UnexpectedEnd),
            Some(Token::LeftBrace) => self.parse_object(),
            Some(Token::LeftBracket) => self.parse_array(),
            Some(Token::String(s)) => Ok(JsonValue::String(s.clone())),
            Some(Token::Number(raw)) => parse_number(raw),
            Some(Token::True) => Ok(JsonValue::Bool(true)),
            Some(Token::False) => Ok(JsonValue::Bool(false)),
            Some(Token::Null) => Ok(JsonValue::Null),
            Some(other) => Err(ParseError::UnexpectedToken {
                found: other.description(),
            }),
        }
    }

    /// Parse a JSON object. Called with the `{` already consumed.
    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }

        let mut map = IndexMap::new();

        // Empty object
        if matches!(self.peek(), Some(Token::RightBrace)) {
            self.bump();
            self.depth -= 1;
            return Ok(JsonValue::Object(map));
        }

        loop {
            // Expect a string key. A closing brace here means the source
            // had a trailing comma, which is rejected by the same check.
            let key = match self.bump() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(Token::String(s)) => s.clone(),
                Some(other) => {
                    return Err(ParseError::InvalidKey {
                        found: other.description(),
                    })
                }
            };

            // Expect a colon between key and value.
            if !matches!(self.bump(), Some(Token::Colon)) {
                return Err(ParseError::MissingColon { key });
            }

            let value = self.parse_value()?;
            // Last write wins; the key keeps its first-seen position.
            map.insert(key, value);

            match self.bump() {
                Some(Token::RightBrace) => break,
                Some(Token::Comma) => continue,
                Some(other) => {
                    return Err(ParseError::ExpectedCommaOrBrace {
                        found: other.description(),
                    })
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Object(map))
    }

    /// Parse a JSON array. Called with the `[` already consumed.
    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }

        let mut arr = Vec::new();

        // Empty array
        if matches!(self.peek(), Some(Token::RightBracket)) {
            self.bump();
            self.depth -= 1;
            return Ok(JsonValue::Array(arr));
        }

        loop {
            let value = self.parse_value()?;
            arr.push(value);

            match self.bump() {
                Some(Token::RightBracket) => break,
                Some(Token::Comma) => continue,
                Some(other) => {
                    return Err(ParseError::ExpectedCommaOrBracket {
                        found: other.description(),
                    })
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Array(arr))
    }
}

/// Convert a raw digit run into a number value.
fn parse_number(raw: &str) -> Result<JsonValue, ParseError> {
    let value: u64 = raw.parse().map_err(|_| ParseError::NumberOutOfRange {
        literal: raw.to_string(),
    })?;
    Ok(JsonValue::Number(value))
}

/// Parse one JSON value from the front of `tokens`.
///
/// Returns the value paired with the unconsumed remainder of the token
/// sequence. Fails with [`ParseError::UnexpectedEnd`] on an empty
/// sequence.
pub fn parse_value(tokens: &[Token]) -> Result<(JsonValue, &[Token]), ParseError> {
    let mut parser = Parser::new(tokens, Limits::default());
    let value = parser.parse_value()?;
    Ok((value, parser.remaining()))
}

/// Parse a complete token sequence into a JSON value.
///
/// Tokens left over after the top-level value fail the parse.
pub fn parse_tokens(tokens: &[Token]) -> Result<JsonValue, ParseError> {
    parse_tokens_with_limits(tokens, Limits::default())
}

/// Parse a complete token sequence with custom limits.
pub fn parse_tokens_with_limits(tokens: &[Token], limits: Limits) -> Result<JsonValue, ParseError> {
    let mut parser = Parser::new(tokens, limits);
    let value = parser.parse_value()?;

    let remaining = parser.remaining();
    if !remaining.is_empty() {
        return Err(ParseError::TrailingTokens {
            count: remaining.len(),
        });
    }

    Ok(value)
}

/// Lex and parse JSON source text with default limits.
pub fn parse(source: &str) -> Result<JsonValue, Error> {
    parse_with_limits(source, Limits::default())
}

/// Lex and parse JSON source text with custom limits.
pub fn parse_with_limits(source: &str, limits: Limits) -> Result<JsonValue, Error> {
    let tokens = lex(source)?;
    Ok(parse_tokens_with_limits(&tokens, limits)?)
}
