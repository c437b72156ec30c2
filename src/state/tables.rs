use tracing::{debug, warn};

use crate::models::{Table, TableSummary};

/// Database screen state: the fixed catalog and which table is highlighted.
pub struct TableBrowser {
    tables: Vec<Table>,
    selected: Option<usize>,
}

impl TableBrowser {
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            tables,
            selected: None,
        }
    }

    pub fn list_tables(&self) -> &[Table] {
        &self.tables
    }

    /// Unknown names leave the current selection untouched.
    pub fn select_table(&mut self, name: &str) -> Option<&Table> {
        match self.tables.iter().position(|t| t.name == name) {
            Some(idx) => {
                debug!(table = name, "table selected");
                self.selected = Some(idx);
            }
            None => warn!(table = name, "select ignored, no such table"),
        }
        self.current_selection()
    }

    pub fn current_selection(&self) -> Option<&Table> {
        self.selected.map(|idx| &self.tables[idx])
    }

    pub fn table_summary(&self) -> Option<TableSummary> {
        self.current_selection().map(TableSummary::of)
    }
}
