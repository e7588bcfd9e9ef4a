//! Tables: ordered columns with equal row counts

use super::Column;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// An ordered set of columns sharing one row count
pub struct Table<R: Runtime> {
    columns: Vec<Column<R>>,
    num_rows: usize,
}

impl<R: Runtime> Table<R> {
    /// Build a table, checking that every column has the same row count
    pub fn new(columns: Vec<Column<R>>) -> Result<Self> {
        let num_rows = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != num_rows) {
            return Err(Error::ShapeMismatch {
                expected: num_rows,
                got: bad.len(),
            });
        }
        Ok(Self { columns, num_rows })
    }

    /// Single-column table view
    pub fn from_column(column: Column<R>) -> Self {
        let num_rows = column.len();
        Self {
            columns: vec![column],
            num_rows,
        }
    }

    /// Number of columns
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Column at `index`
    #[inline]
    pub fn column(&self, index: usize) -> Option<&Column<R>> {
        self.columns.get(index)
    }

    /// All columns in order
    #[inline]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }
}

impl<R: Runtime> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            num_rows: self.num_rows,
        }
    }
}

impl<R: Runtime> std::fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("num_rows", &self.num_rows)
            .field("columns", &self.columns)
            .finish()
    }
}
