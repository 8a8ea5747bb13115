use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::error::LexError;
use crate::token::{Token, TokenKind};

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r#"^(?:(?P<operator>\\/|/\\|->|[()!&|~=;])|(?P<keyword>let\s)|(?P<symbol>[A-Z])|(?P<constant>[01]))"#
    )
    .expect("token pattern must compile");
}

/// Position of a token in the source that has been recognised but not issued.
#[derive(Debug, Clone, Copy)]
struct Lexeme {
    kind: TokenKind,
    start: usize,
    len: usize,
    end: usize,
}

/// On-demand tokenizer over a complete formula text.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]; a single token
/// of lookahead is available through [`Lexer::peek_kind`]. Whitespace between
/// tokens is insignificant.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    next_id: usize,
}

impl<'a> Lexer<'a> {
    pub const fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            next_id: 0,
        }
    }

    /// Split a whole text into tokens.
    pub fn tokenize(src: &'a str) -> Result<Vec<Token>, LexError> {
        Self::new(src).collect()
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let lexeme = self.scan_lexeme()?.ok_or(LexError::UnexpectedEof)?;

        let token = Token {
            kind: lexeme.kind,
            id: self.next_id,
            position: lexeme.start + 1,
            value: self.src[lexeme.start..lexeme.start + lexeme.len].to_string(),
        };

        self.next_id += 1;
        self.pos = lexeme.end;

        trace!("issued {token}");

        Ok(token)
    }

    /// Kind of the upcoming token, or `None` at the end of the input.
    pub fn peek_kind(&self) -> Result<Option<TokenKind>, LexError> {
        Ok(self.scan_lexeme()?.map(|lexeme| lexeme.kind))
    }

    pub fn is_exhausted(&self) -> bool {
        self.src[self.pos..].trim_start().is_empty()
    }

    fn scan_lexeme(&self) -> Result<Option<Lexeme>, LexError> {
        let rest = &self.src[self.pos..];
        let trimmed = rest.trim_start();

        if trimmed.is_empty() {
            return Ok(None);
        }

        let start = self.pos + (rest.len() - trimmed.len());
        let unsupported = || LexError::UnsupportedSymbol {
            symbol: trimmed.chars().next().unwrap_or_default(),
            position: start + 1,
        };

        let captures = TOKENIZER.captures(trimmed).ok_or_else(unsupported)?;
        let end = start + captures.get(0).map_or(0, |m| m.end());

        if let Some(operator) = captures.name("operator") {
            let kind = match operator.as_str() {
                "(" => TokenKind::OpenBracket,
                ")" => TokenKind::CloseBracket,
                "!" => TokenKind::Not,
                "&" | "/\\" => TokenKind::And,
                "|" | "\\/" => TokenKind::Or,
                "->" => TokenKind::Implication,
                "~" => TokenKind::Equality,
                "=" => TokenKind::Assign,
                ";" => TokenKind::StatementEnd,
                _ => return Err(unsupported()),
            };

            Ok(Some(Lexeme {
                kind,
                start,
                len: operator.len(),
                end,
            }))
        } else if captures.name("keyword").is_some() {
            Ok(Some(Lexeme {
                kind: TokenKind::DeclareKeyword,
                start,
                len: "let".len(),
                end,
            }))
        } else if captures.name("symbol").is_some() {
            Ok(Some(Lexeme {
                kind: TokenKind::Symbol,
                start,
                len: 1,
                end,
            }))
        } else if captures.name("constant").is_some() {
            Ok(Some(Lexeme {
                kind: TokenKind::Constant,
                start,
                len: 1,
                end,
            }))
        } else {
            Err(unsupported())
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let token = self.next_token();

        // a lexical error ends the stream
        if token.is_err() {
            self.pos = self.src.len();
        }

        Some(token)
    }
}
