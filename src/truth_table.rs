use std::fmt::{self, Display};
use std::io::Write;

use itertools::Itertools;

/// Result column header in rendered tables.
const RESULT_HEADER: &str = "F";

/// Values of a formula under every assignment of its free variables.
///
/// `symbols` names the columns of `rows`: first the variables fixed by
/// declarations, then the free variables. `results[i]` is the value of the
/// formula for `rows[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TruthTable {
    pub symbols: Vec<String>,
    pub rows: Vec<Vec<bool>>,
    pub results: Vec<bool>,
}

impl TruthTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[bool], bool)> {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .zip(self.results.iter().copied())
    }

    /// Rows for which the formula holds.
    pub fn models(&self) -> impl Iterator<Item = &[bool]> {
        self.iter().filter(|(_, result)| *result).map(|(row, _)| row)
    }

    pub fn is_tautology(&self) -> bool {
        self.results.iter().all(|&r| r)
    }

    pub fn is_satisfiable(&self) -> bool {
        self.results.iter().any(|&r| r)
    }

    /// Writes the table as CSV with a header line; values are `0`/`1`.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(
            self.symbols
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(RESULT_HEADER)),
        )?;

        for (row, result) in self.iter() {
            csv_writer.write_record(
                row.iter()
                    .chain(std::iter::once(&result))
                    .map(|&value| bit(value)),
            )?;
        }

        csv_writer.flush()?;

        Ok(())
    }
}

const fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self
            .symbols
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(RESULT_HEADER))
            .collect_vec();
        let widths = header.iter().map(|h| h.len()).collect_vec();

        writeln!(f, "{}", header.iter().join(" | "))?;
        writeln!(f, "{}", widths.iter().map(|&w| "-".repeat(w)).join("-+-"))?;

        for (row, result) in self.iter() {
            let cells = row
                .iter()
                .chain(std::iter::once(&result))
                .zip(widths.iter())
                .map(|(&value, &width)| format!("{:<width$}", bit(value)))
                .join(" | ");

            writeln!(f, "{}", cells.trim_end())?;
        }

        Ok(())
    }
}
