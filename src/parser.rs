use log::debug;

use crate::error::{Expected, Result, SyntaxError};
use crate::expression::{BinaryOperator, Expression};
use crate::lexer::Lexer;
use crate::symbol_table::SymbolTable;
use crate::token::{Token, TokenKind};

/// A fully built formula together with the symbol table of its parse.
#[derive(Debug, Clone)]
pub struct ParsedFormula {
    pub root: Expression,
    pub symbols: SymbolTable,
}

impl ParsedFormula {
    pub fn new(src: &str) -> Result<Self> {
        Parser::new(src).build()
    }

    /// Outline of the formula tree, see [`Expression::outline`].
    pub fn debug(&self) -> String {
        self.root.outline()
    }
}

/// Recursive-descent parser for bracketed formulas.
///
/// Every binary operation must be enclosed in its own brackets and a single
/// bracket level only chains operators of one kind: `(A|B|C)` is accepted,
/// `(A|B&C)` must be written as `((A|B)&C)`. Declarations of the form
/// `let A = 1;` may precede any factor.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::from_lexer(Lexer::new(src))
    }

    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            symbols: SymbolTable::new(),
        }
    }

    /// Parses exactly one factor and requires the input to end after it.
    pub fn build(mut self) -> Result<ParsedFormula> {
        let root = self.parse_factor()?;

        if !self.lexer.is_exhausted() {
            let token = self.advance()?;
            return Err(SyntaxError::TrailingInput(token).into());
        }

        Ok(ParsedFormula {
            root,
            symbols: self.symbols,
        })
    }

    fn parse_factor(&mut self) -> Result<Expression> {
        let token = self.advance()?;

        match token.kind {
            TokenKind::DeclareKeyword => {
                self.parse_declaration()?;
                self.parse_factor()
            }
            TokenKind::OpenBracket => self.parse_parenthesized_formula(),
            TokenKind::Symbol => Ok(Expression::Terminal(token.value)),
            TokenKind::Constant => Ok(Expression::Constant(token.value == "1")),
            _ => Err(SyntaxError::UnexpectedToken {
                got: token,
                want: Expected::Formula,
            }
            .into()),
        }
    }

    // let SYMBOL = CONSTANT ;  (the keyword is already consumed)
    fn parse_declaration(&mut self) -> Result<()> {
        let symbol = self.expect_in_declaration(TokenKind::Symbol)?;
        self.expect_in_declaration(TokenKind::Assign)?;
        let constant = self.expect_in_declaration(TokenKind::Constant)?;
        self.expect_in_declaration(TokenKind::StatementEnd)?;

        debug!("declared {} = {}", symbol.value, constant.value);

        self.symbols.declare(symbol, constant.value == "1")?;

        Ok(())
    }

    fn parse_parenthesized_formula(&mut self) -> Result<Expression> {
        if self.lexer.peek_kind()? == Some(TokenKind::Not) {
            self.parse_negation()
        } else {
            self.parse_binary_formula()
        }
    }

    fn parse_negation(&mut self) -> Result<Expression> {
        self.expect(TokenKind::Not)?;
        let negated = self.parse_factor()?;
        self.expect(TokenKind::CloseBracket)?;

        Ok(Expression::not(negated))
    }

    fn parse_binary_formula(&mut self) -> Result<Expression> {
        let mut formula = self.parse_factor()?;

        let token = self.advance()?;
        let op = BinaryOperator::from_kind(token.kind).ok_or(SyntaxError::UnexpectedToken {
            got: token,
            want: Expected::BinaryOperator,
        })?;

        loop {
            let right = self.parse_factor()?;
            formula = Expression::binary(op, formula, right);

            let token = self.advance()?;
            match token.kind {
                TokenKind::CloseBracket => return Ok(formula),
                kind if kind == op.kind() => continue,
                _ => {
                    return Err(SyntaxError::UnexpectedToken {
                        got: token,
                        want: Expected::Kind(TokenKind::CloseBracket),
                    }
                    .into())
                }
            }
        }
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self.lexer.next_token()?;
        self.symbols.record(&token);
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.advance()?;

        if token.kind == kind {
            Ok(token)
        } else {
            Err(SyntaxError::UnexpectedToken {
                got: token,
                want: Expected::Kind(kind),
            }
            .into())
        }
    }

    fn expect_in_declaration(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.advance()?;

        if token.kind == kind {
            Ok(token)
        } else {
            Err(SyntaxError::MalformedDeclaration { got: token, want: kind }.into())
        }
    }
}
