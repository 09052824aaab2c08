use crate::error::TableShapeError;

/// A normalized tabular query result.
///
/// Columns keep the order declared by the endpoint (`head.vars` for SPARQL
/// JSON results, the header record for CSV). Rows are stored row-major and
/// always have one cell per column, so a variable left unbound by an
/// `OPTIONAL` pattern shows up as `None` instead of a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ResultTable {
    /// Creates an empty table with the given column order.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from pre-assembled rows, validating their width.
    pub fn from_rows(
        columns: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Result<Self, TableShapeError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<(), TableShapeError> {
        if row.len() != self.columns.len() {
            return Err(TableShapeError {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell at `(row, column)`, or `None` if out of bounds or
    /// the cell is unbound.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_enforces_width() {
        let mut table = ResultTable::new(vec!["a".to_owned(), "b".to_owned()]);
        let err = table.push_row(vec![Some("1".to_owned())]).unwrap_err();
        assert_eq!(err.expected, 2);
        assert_eq!(err.actual, 1);
        assert_eq!(table.num_rows(), 0);
    }

    #[test]
    fn cell_access() {
        let mut table = ResultTable::new(vec!["a".to_owned(), "b".to_owned()]);
        table
            .push_row(vec![Some("1".to_owned()), None])
            .unwrap();
        assert_eq!(table.cell(0, 0), Some("1"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }
}
