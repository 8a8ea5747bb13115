use rustc_hash::FxHashMap;

use crate::error::SyntaxError;
use crate::token::Token;

/// A variable fixed by a `let NAME = 0|1;` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: bool,
    /// The symbol token naming the variable
    pub token: Token,
}

/// Per-parse record of issued tokens and declared variables.
///
/// Diagnostics carry their offending [`Token`] themselves; the token history
/// is kept for inspection, e.g. the token listing of `bec --debug`.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    tokens: Vec<Token>,
    declarations: Vec<Declaration>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, token: &Token) {
        self.tokens.push(token.clone());
    }

    /// Looks up an issued token by its id.
    pub fn token(&self, id: usize) -> Option<&Token> {
        // ids are issued in order, so the id is normally also the index
        match self.tokens.get(id) {
            Some(token) if token.id == id => Some(token),
            _ => self.tokens.iter().find(|t| t.id == id),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn declare(&mut self, token: Token, value: bool) -> Result<(), SyntaxError> {
        if self.index.contains_key(&token.value) {
            return Err(SyntaxError::Redeclaration { name: token.value });
        }

        self.index.insert(token.value.clone(), self.declarations.len());
        self.declarations.push(Declaration {
            name: token.value.clone(),
            value,
            token,
        });

        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<bool> {
        self.index.get(name).map(|&i| self.declarations[i].value)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declarations in the order they appear in the source.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}
