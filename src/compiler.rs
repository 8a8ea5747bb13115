use std::io::{self, BufRead};

use crate::error::Result;
use crate::parser::ParsedFormula;
use crate::semantic_analyzer::SemanticAnalyzer;
use crate::truth_table::TruthTable;

/// Runs the lexer, parser and semantic analyzer over one formula text.
///
/// Each analysis parses the text again with fresh instances, so a
/// `Compiler` carries no state between calls.
#[derive(Debug, Clone)]
pub struct Compiler {
    source: String,
}

impl Compiler {
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn from_reader(contents: &mut dyn BufRead) -> io::Result<Self> {
        let mut source = String::new();
        contents.read_to_string(&mut source)?;
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parse(&self) -> Result<ParsedFormula> {
        ParsedFormula::new(&self.source)
    }

    /// `None` if the formula is a PDNF, the diagnostic otherwise.
    pub fn check_pdnf(&self) -> Option<String> {
        match self.parse() {
            Ok(formula) => SemanticAnalyzer::new(&formula.root)
                .check_pdnf()
                .map(|e| e.to_string()),
            Err(e) => Some(e.to_string()),
        }
    }

    pub fn calculate_formula(&self) -> std::result::Result<TruthTable, String> {
        self.try_calculate_formula().map_err(|e| e.to_string())
    }

    fn try_calculate_formula(&self) -> Result<TruthTable> {
        let formula = self.parse()?;
        let table = SemanticAnalyzer::new(&formula.root).evaluate(&formula.symbols)?;
        Ok(table)
    }
}
