use std::fmt::{self, Display};

use rustc_hash::FxHashMap;

use crate::error::SemanticError;
use crate::token::TokenKind;

/// Variable values used while evaluating a tree.
pub type Bindings = FxHashMap<String, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
    Implication,
    Equality,
}

impl BinaryOperator {
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::And => Some(Self::And),
            TokenKind::Or => Some(Self::Or),
            TokenKind::Implication => Some(Self::Implication),
            TokenKind::Equality => Some(Self::Equality),
            _ => None,
        }
    }

    pub const fn kind(self) -> TokenKind {
        match self {
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::Implication => TokenKind::Implication,
            Self::Equality => TokenKind::Equality,
        }
    }

    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implication => !left || right,
            Self::Equality => left == right,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Implication => "IMPLICATION",
            Self::Equality => "EQUALITY",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implication => "->",
            Self::Equality => "~",
        })
    }
}

/// Parsed formula tree.
///
/// Declarations are not part of the tree; they live in the
/// [`SymbolTable`](crate::symbol_table::SymbolTable) of the parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Terminal(String),
    Constant(bool),
    Not(Box<Expression>),
    BinaryOp(BinaryOperator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp(op, Box::new(left), Box::new(right))
    }

    pub fn not(child: Self) -> Self {
        Self::Not(Box::new(child))
    }

    /// The token kind this node was built from.
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Terminal(_) => TokenKind::Symbol,
            Self::Constant(_) => TokenKind::Constant,
            Self::Not(_) => TokenKind::Not,
            Self::BinaryOp(op, _, _) => op.kind(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Terminal(name) => name.clone(),
            Self::Constant(value) => u8::from(*value).to_string(),
            Self::Not(_) => "NOT".to_string(),
            Self::BinaryOp(op, _, _) => op.label().to_string(),
        }
    }

    /// Evaluates the tree under `bindings`.
    ///
    /// The right operand of a binary operator is always evaluated before the
    /// left one. Every terminal must be bound.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<bool, SemanticError> {
        match self {
            Self::Terminal(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| SemanticError::UnboundVariable(name.clone())),
            Self::Constant(value) => Ok(*value),
            Self::Not(child) => Ok(!child.evaluate(bindings)?),
            Self::BinaryOp(op, left, right) => {
                let right = right.evaluate(bindings)?;
                let left = left.evaluate(bindings)?;

                Ok(op.apply(left, right))
            }
        }
    }

    /// Names of all terminals, left to right, repetitions included.
    pub fn terminals(&self) -> Vec<&str> {
        let mut result = Vec::new();
        self.terminals_recursive(&mut result);
        result
    }

    fn terminals_recursive<'a>(&'a self, result: &mut Vec<&'a str>) {
        match self {
            Self::Terminal(name) => result.push(name),
            Self::Constant(_) => {}
            Self::Not(child) => child.terminals_recursive(result),
            Self::BinaryOp(_, left, right) => {
                left.terminals_recursive(result);
                right.terminals_recursive(result);
            }
        }
    }

    /// Box-drawing outline of the tree, one node per line.
    ///
    /// ```text
    /// OR
    /// ├──NOT
    /// │  └──A
    /// └──A
    /// ```
    pub fn outline(&self) -> String {
        let mut out = self.label();
        self.outline_children(&mut out, "");
        out
    }

    fn outline_node(&self, out: &mut String, padding: &str, edge: &str, has_sibling: bool) {
        out.push('\n');
        out.push_str(padding);
        out.push_str(edge);
        out.push_str(&self.label());

        let padding = format!("{padding}{}", if has_sibling { "│  " } else { "   " });
        self.outline_children(out, &padding);
    }

    fn outline_children(&self, out: &mut String, padding: &str) {
        match self {
            Self::Not(child) => child.outline_node(out, padding, "└──", false),
            Self::BinaryOp(_, left, right) => {
                left.outline_node(out, padding, "├──", true);
                right.outline_node(out, padding, "└──", false);
            }
            Self::Terminal(_) | Self::Constant(_) => {}
        }
    }
}

impl Display for Expression {
    /// Prints the tree back in the input syntax, fully bracketed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(name) => write!(f, "{name}"),
            Self::Constant(value) => write!(f, "{}", u8::from(*value)),
            Self::Not(child) => write!(f, "(!{child})"),
            Self::BinaryOp(op, left, right) => write!(f, "({left}{op}{right})"),
        }
    }
}
