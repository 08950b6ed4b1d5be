//! Render-agnostic view models
//!
//! Pure functions from loaded entities to display shapes. Nothing here
//! touches the network or the stores; a front end (terminal, GUI, web)
//! decides how to paint a [`TableView`] or the stat cards.

mod tables;

pub use tables::{
    StatCard, dashboard_cards, departments_table, designations_table, employees_table,
    payrolls_table,
};

use std::fmt;

/// A rendered table: column headers plus stringified rows.
///
/// When `rows` is empty a front end shows `empty_message` instead of a
/// bare table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub empty_message: &'static str,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableView {
    /// Plain-text rendering used by the terminal front end.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{}", self.empty_message);
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        for (i, column) in self.columns.iter().enumerate() {
            write!(f, "{:<width$}  ", column, width = widths[i])?;
        }
        writeln!(f)?;
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                write!(f, "{:<width$}  ", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
