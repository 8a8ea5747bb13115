//! Diagnostics produced while compiling a formula.
//!
//! Every failure of the pipeline is one of three kinds: [`LexError`] for text
//! that cannot be split into tokens, [`SyntaxError`] for token sequences the
//! grammar rejects and [`SemanticError`] for trees that parse but fail an
//! analysis. [`CompileError`] wraps all three so the stages can propagate with
//! `?`. The `Display` output of each variant is the diagnostic string handed
//! to callers of [`check_pdnf`](crate::check_pdnf) and
//! [`calculate_formula`](crate::calculate_formula).

use std::error::Error;
use std::fmt;

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    UnsupportedSymbol { symbol: char, position: usize },
    /// `next` was called after the input ran out
    UnexpectedEof,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSymbol { symbol, position } => {
                write!(f, "unsupported symbol: {symbol} at position {position}")
            }
            Self::UnexpectedEof => write!(f, "unexpected eof"),
        }
    }
}

impl Error for LexError {}

/// What the parser was looking for when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    Formula,
    BinaryOperator,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => fmt::Display::fmt(kind, f),
            Self::Formula => write!(f, "formula"),
            Self::BinaryOperator => write!(f, "binary operator"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    UnexpectedToken { got: Token, want: Expected },
    MalformedDeclaration { got: Token, want: TokenKind },
    Redeclaration { name: String },
    /// A complete formula was followed by more input
    TrailingInput(Token),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { got, want } => {
                write!(f, "unexpected type: got: {got}, but want: {want}")
            }
            Self::MalformedDeclaration { got, want } => {
                write!(f, "malformed declaration: got: {got}, but want: {want}")
            }
            Self::Redeclaration { name } => write!(f, "variable {name} is already declared"),
            Self::TrailingInput(token) => write!(
                f,
                "syntax error in your formula, unexpected identifier: {token}"
            ),
        }
    }
}

impl Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    ExpectedOrOperator,
    ExpectedSymbol,
    UnexpectedToken,
    RepeatedElement(String),
    EqualConjunction,
    NotEqualVars,
    TooManyConjunctions,
    UnboundVariable(String),
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedOrOperator => write!(f, "expected or operator"),
            Self::ExpectedSymbol => write!(f, "expected a type here"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::RepeatedElement(name) => write!(f, "got repeated element: {name}"),
            Self::EqualConjunction => write!(f, "got equal elementary conjunction"),
            Self::NotEqualVars => write!(f, "got not equal vars in conjunctions"),
            Self::TooManyConjunctions => write!(f, "got to many conjunction"),
            Self::UnboundVariable(name) => write!(f, "unbound variable: {name}"),
        }
    }
}

impl Error for SemanticError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lex(LexError),
    Syntax(SyntaxError),
    Semantic(SemanticError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => fmt::Display::fmt(e, f),
            Self::Syntax(e) => fmt::Display::fmt(e, f),
            Self::Semantic(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for CompileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for CompileError {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
