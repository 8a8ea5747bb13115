use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenBracket,
    CloseBracket,
    Not,
    And,
    Or,
    Implication,
    Equality,
    Symbol,
    Constant,
    Assign,
    DeclareKeyword,
    StatementEnd,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::OpenBracket => "open bracket",
            Self::CloseBracket => "close bracket",
            Self::Not => "not operator",
            Self::And => "and operator",
            Self::Or => "or operator",
            Self::Implication => "implication",
            Self::Equality => "equality",
            Self::Symbol => "symbol",
            Self::Constant => "constant",
            Self::Assign => "assignment operator",
            Self::DeclareKeyword => "declare keyword",
            Self::StatementEnd => "statement end",
        })
    }
}

/// A single lexeme issued by the [`Lexer`](crate::lexer::Lexer).
///
/// `id` is unique per lexer and increases with every issued token; it is only
/// used to look tokens up again in the [`SymbolTable`](crate::symbol_table::SymbolTable).
/// `position` is the 1-based byte offset of the first character of the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub id: usize,
    pub position: usize,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token type: {}, at position: {}, with value: {}",
            self.kind, self.position, self.value
        )
    }
}
