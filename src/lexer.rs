//! JSON lexer/tokenizer.
//!
//! Converts raw input text into a flat sequence of tokens for the parser.
//! The scan is a single left-to-right pass: each character is consumed by
//! exactly one branch and never re-examined once the cursor has advanced
//! past it.
//!
//! String handling is deliberately minimal. A backslash escapes the
//! character that follows for the purpose of finding the closing quote;
//! `\"` resolves to `"` and `\\` resolves to `\`, while every other
//! escape sequence is kept verbatim in the token payload.

use crate::error::LexError;

const KEYWORD_TRUE: &str = "true";
const KEYWORD_FALSE: &str = "false";
const KEYWORD_NULL: &str = "null";

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// String literal (raw characters between the quotes)
    String(String),
    /// Number literal (raw run of ASCII digits)
    Number(String),
    /// True literal
    True,
    /// False literal
    False,
    /// Null literal
    Null,
}

impl Token {
    /// Short description of the token kind for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Token::LeftBrace => "'{'",
            Token::RightBrace => "'}'",
            Token::LeftBracket => "'['",
            Token::RightBracket => "']'",
            Token::Colon => "':'",
            Token::Comma => "','",
            Token::String(_) => "a string literal",
            Token::Number(_) => "a number literal",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Null => "'null'",
        }
    }
}

/// JSON lexer that tokenizes input text.
struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The unscanned tail of the input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Look at the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the current character.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Skip whitespace characters.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.bump();
        }
    }

    /// Read the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '{' => {
                self.bump();
                Token::LeftBrace
            }
            '}' => {
                self.bump();
                Token::RightBrace
            }
            '[' => {
                self.bump();
                Token::LeftBracket
            }
            ']' => {
                self.bump();
                Token::RightBracket
            }
            ':' => {
                self.bump();
                Token::Colon
            }
            ',' => {
                self.bump();
                Token::Comma
            }
            '"' => self.read_string()?,
            '0'..='9' => self.read_number(),
            't' | 'f' | 'n' => self.read_keyword(ch)?,
            found => {
                return Err(LexError::UnrecognizedCharacter {
                    index: self.pos,
                    found,
                })
            }
        };

        Ok(Some(token))
    }

    /// Read a `true`, `false`, or `null` literal.
    ///
    /// The keyword is matched as a fixed-length substring; `starts_with`
    /// compares within bounds, so a keyword ending exactly at end of
    /// input still matches while a truncated run does not.
    fn read_keyword(&mut self, first: char) -> Result<Token, LexError> {
        let (keyword, token) = match first {
            't' => (KEYWORD_TRUE, Token::True),
            'f' => (KEYWORD_FALSE, Token::False),
            _ => (KEYWORD_NULL, Token::Null),
        };

        if self.rest().starts_with(keyword) {
            self.pos += keyword.len();
            Ok(token)
        } else {
            Err(LexError::UnrecognizedCharacter {
                index: self.pos,
                found: first,
            })
        }
    }

    /// Read a string token.
    ///
    /// Scans forward from the opening quote until an unescaped closing
    /// quote. Fails if the input ends first.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        // Consume the opening quote.
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(LexError::UnterminatedString { index: start }),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    None => return Err(LexError::UnterminatedString { index: start }),
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some(other) => {
                        // Unrecognized escapes pass through untouched.
                        value.push('\\');
                        value.push(other);
                    }
                },
                Some(ch) => value.push(ch),
            }
        }

        Ok(Token::String(value))
    }

    /// Read a number token: the maximal run of ASCII digits.
    ///
    /// The raw digit run is kept as-is at the token level; the parser is
    /// responsible for converting it to an integer. A leading `-` is not
    /// a recognized start character, so signed numbers fail the lex.
    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some('0'..='9')) {
            self.bump();
        }
        Token::Number(self.input[start..self.pos].to_string())
    }
}

/// Tokenize JSON source text into an ordered token sequence.
///
/// The returned sequence is immutable; the parser only ever consumes it
/// from the front. Empty input yields an empty sequence.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
