pub use compiler::Compiler;
pub use error::{CompileError, LexError, SemanticError, SyntaxError};
pub use truth_table::TruthTable;

pub mod compiler;
pub mod error;
pub mod expression;
pub mod lexer;
pub mod parser;
pub mod parser_io;
pub mod semantic_analyzer;
pub mod symbol_table;
pub mod token;

mod truth_table;

/// `None` if `formula` is a perfect disjunctive normal form, otherwise the
/// lexical, syntax or PDNF diagnostic.
pub fn check_pdnf(formula: &str) -> Option<String> {
    Compiler::new(formula).check_pdnf()
}

/// Truth table of `formula` over all assignments of its free variables, or a
/// diagnostic if the formula does not parse.
pub fn calculate_formula(formula: &str) -> Result<TruthTable, String> {
    Compiler::new(formula).calculate_formula()
}
