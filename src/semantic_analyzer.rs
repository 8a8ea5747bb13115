use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::error::SemanticError;
use crate::expression::{BinaryOperator, Bindings, Expression};
use crate::symbol_table::SymbolTable;
use crate::truth_table::TruthTable;

/// One AND-chain of literals: `(variable, polarity)` pairs.
type Clause<'a> = Vec<(&'a str, bool)>;

/// Analyses over a fully built formula tree.
pub struct SemanticAnalyzer<'a> {
    root: &'a Expression,
}

impl<'a> SemanticAnalyzer<'a> {
    pub const fn new(root: &'a Expression) -> Self {
        Self { root }
    }

    /// Checks whether the formula is a perfect disjunctive normal form.
    ///
    /// Returns the first violation found, or `None` for a valid PDNF.
    pub fn check_pdnf(&self) -> Option<SemanticError> {
        self.validate_pdnf().err()
    }

    fn validate_pdnf(&self) -> Result<(), SemanticError> {
        let conjunctions = split_disjunction(self.root)?;

        let mut clauses: Vec<Clause> = Vec::with_capacity(conjunctions.len());
        for conjunction in conjunctions {
            let mut clause = Clause::new();
            flatten_conjunction(conjunction, &mut clause)?;
            assert_no_repeated_vars(&clause)?;
            clauses.push(clause);
        }

        debug!("formula has {} elementary conjunctions", clauses.len());

        for clause in clauses.iter_mut() {
            clause.sort_by(|lhs, rhs| lhs.0.cmp(rhs.0));
        }

        if clauses.iter().sorted().tuple_windows().any(|(a, b)| a == b) {
            return Err(SemanticError::EqualConjunction);
        }

        let vars: Vec<&str> = clauses
            .first()
            .map(|clause| clause.iter().map(|(name, _)| *name).collect())
            .unwrap_or_default();
        if clauses
            .iter()
            .any(|clause| !clause.iter().map(|(name, _)| *name).eq(vars.iter().copied()))
        {
            return Err(SemanticError::NotEqualVars);
        }

        let max_clauses = u32::try_from(vars.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n));
        if max_clauses.is_some_and(|max| clauses.len() > max) {
            return Err(SemanticError::TooManyConjunctions);
        }

        Ok(())
    }

    /// Evaluates the formula under every assignment of its free variables.
    ///
    /// Variables fixed by declarations in `symbols` form the leading columns.
    /// The free variables follow in order of their first appearance; in row
    /// `i` free variable `j` holds bit `j` of `i`.
    pub fn evaluate(&self, symbols: &SymbolTable) -> Result<TruthTable, SemanticError> {
        let declarations = symbols.declarations();

        let free_vars: Vec<&str> = self
            .root
            .terminals()
            .into_iter()
            .filter(|name| !symbols.is_declared(name))
            .unique()
            .collect();

        let fixed: Vec<bool> = declarations.iter().map(|d| d.value).collect();
        let symbol_names = declarations
            .iter()
            .map(|d| d.name.clone())
            .chain(free_vars.iter().map(|name| name.to_string()))
            .collect();

        // symbols are single letters, so there are at most 26 free variables
        let row_count = 1usize << free_vars.len();

        debug!(
            "evaluating {} rows over {} free variables",
            row_count,
            free_vars.len()
        );

        let evaluated: Vec<(Vec<bool>, bool)> = (0..row_count)
            .into_par_iter()
            .map(|i| -> Result<(Vec<bool>, bool), SemanticError> {
                let assignment: Vec<bool> =
                    (0..free_vars.len()).map(|j| (i >> j) & 1 == 1).collect();

                let bindings: Bindings = declarations
                    .iter()
                    .map(|d| (d.name.clone(), d.value))
                    .chain(
                        free_vars
                            .iter()
                            .zip(assignment.iter())
                            .map(|(name, value)| (name.to_string(), *value)),
                    )
                    .collect();

                let result = self.root.evaluate(&bindings)?;
                let row: Vec<bool> = fixed.iter().chain(assignment.iter()).copied().collect();

                Ok((row, result))
            })
            .collect::<Result<_, SemanticError>>()?;

        let (rows, results) = evaluated.into_iter().unzip();

        Ok(TruthTable {
            symbols: symbol_names,
            rows,
            results,
        })
    }
}

/// Collects the conjunctions of an OR-spine. A lone conjunction is a
/// single-clause formula.
fn split_disjunction(root: &Expression) -> Result<Vec<&Expression>, SemanticError> {
    let mut conjunctions = Vec::new();

    match root {
        Expression::BinaryOp(BinaryOperator::And, _, _) => conjunctions.push(root),
        _ => split_disjunction_recursive(root, &mut conjunctions)?,
    }

    Ok(conjunctions)
}

fn split_disjunction_recursive<'a>(
    node: &'a Expression,
    conjunctions: &mut Vec<&'a Expression>,
) -> Result<(), SemanticError> {
    match node {
        Expression::BinaryOp(BinaryOperator::Or, left, right) => {
            for operand in [left, right] {
                let operand: &Expression = operand;
                match operand {
                    Expression::BinaryOp(BinaryOperator::Or, _, _) => {
                        split_disjunction_recursive(operand, conjunctions)?
                    }
                    Expression::BinaryOp(BinaryOperator::And, _, _) => conjunctions.push(operand),
                    _ => return Err(SemanticError::ExpectedOrOperator),
                }
            }
            Ok(())
        }
        _ => Err(SemanticError::ExpectedOrOperator),
    }
}

fn flatten_conjunction<'a>(
    node: &'a Expression,
    clause: &mut Clause<'a>,
) -> Result<(), SemanticError> {
    match node {
        Expression::BinaryOp(BinaryOperator::And, left, right) => {
            flatten_conjunction(left, clause)?;
            flatten_conjunction(right, clause)
        }
        Expression::Terminal(name) => {
            clause.push((name.as_str(), true));
            Ok(())
        }
        Expression::Not(child) => match &**child {
            Expression::Terminal(name) => {
                clause.push((name.as_str(), false));
                Ok(())
            }
            _ => Err(SemanticError::ExpectedSymbol),
        },
        _ => Err(SemanticError::UnexpectedToken),
    }
}

fn assert_no_repeated_vars(clause: &Clause) -> Result<(), SemanticError> {
    match clause
        .iter()
        .map(|(name, _)| *name)
        .sorted()
        .tuple_windows()
        .find(|(a, b)| a == b)
    {
        Some((name, _)) => Err(SemanticError::RepeatedElement(name.to_string())),
        None => Ok(()),
    }
}
