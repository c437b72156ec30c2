use serde::Serialize;

use crate::models::{Column, Connection, Table, TableSummary};
use crate::state::TableBrowser;

use super::format_count;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHeader {
    pub title: &'static str,
    pub subtitle: String,
}

impl DatabaseHeader {
    /// Names the connection the structure screen claims to show.
    pub fn for_connection(source: Option<&Connection>) -> Self {
        let subtitle = source
            .map(|c| format!("{} • {}", c.name, c.database))
            .unwrap_or_default();
        Self {
            title: "Database Structure",
            subtitle,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableListItem {
    pub name: String,
    pub rows: String,
    pub columns: usize,
    pub selected: bool,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRow {
    pub name: String,
    pub data_type: String,
    pub nullable: &'static str,
    pub key: Option<&'static str>,
}

impl From<&Column> for ColumnRow {
    fn from(col: &Column) -> Self {
        Self {
            name: col.name.clone(),
            data_type: col.data_type.clone(),
            nullable: if col.nullable { "Yes" } else { "No" },
            key: col.primary.then_some("PRIMARY"),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TableDetail {
    Unselected {
        title: &'static str,
        hint: &'static str,
    },
    Selected {
        title: String,
        columns: Vec<ColumnRow>,
        summary: TableSummary,
    },
}

impl TableDetail {
    fn of(selection: Option<&Table>) -> Self {
        match selection {
            None => TableDetail::Unselected {
                title: "Select a table",
                hint: "Select a table from the list on the left",
            },
            Some(table) => TableDetail::Selected {
                title: format!("Table: {}", table.name),
                columns: table.columns.iter().map(ColumnRow::from).collect(),
                summary: TableSummary::of(table),
            },
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseView {
    pub header: DatabaseHeader,
    pub list_title: String,
    pub tables: Vec<TableListItem>,
    pub detail: TableDetail,
}

pub fn database_view(browser: &TableBrowser, source: Option<&Connection>) -> DatabaseView {
    let selection = browser.current_selection();
    let selected_name = selection.map(|t| t.name.as_str());
    let tables = browser
        .list_tables()
        .iter()
        .map(|t| TableListItem {
            name: t.name.clone(),
            rows: format_count(t.row_count),
            columns: t.columns.len(),
            selected: selected_name == Some(t.name.as_str()),
        })
        .collect::<Vec<_>>();

    DatabaseView {
        header: DatabaseHeader::for_connection(source),
        list_title: format!("Tables ({})", tables.len()),
        tables,
        detail: TableDetail::of(selection),
    }
}
