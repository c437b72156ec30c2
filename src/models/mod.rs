use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DbKind {
    Postgresql,
    Mysql,
    Mongodb,
}

impl DbKind {
    pub fn default_port(self) -> u16 {
        match self {
            DbKind::Postgresql => 5432,
            DbKind::Mysql => 3306,
            DbKind::Mongodb => 27017,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DbKind::Postgresql => "postgresql",
            DbKind::Mysql => "mysql",
            DbKind::Mongodb => "mongodb",
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" => Ok(DbKind::Postgresql),
            "mysql" => Ok(DbKind::Mysql),
            "mongodb" => Ok(DbKind::Mongodb),
            other => Err(AppError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// Port as committed from the form. Text that did not parse is kept verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Port {
    Number(i64),
    Invalid(String),
}

impl Port {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => Port::Number(n),
            Err(_) => Port::Invalid(raw.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Port::Number(_))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => write!(f, "{}", n),
            Port::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub kind: DbKind,
    pub host: String,
    pub port: Port,
    pub database: String,
    pub status: ConnectionStatus,
}

/// Uncommitted add-connection form. `port` holds the raw input text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub kind: DbKind,
    pub host: String,
    pub port: String,
    pub database: String,
}

impl Default for Draft {
    fn default() -> Self {
        let kind = DbKind::Postgresql;
        Self {
            name: String::new(),
            kind,
            host: String::new(),
            port: kind.default_port().to_string(),
            database: String::new(),
        }
    }
}

/// Free-text draft fields. `kind` is changed through its own operation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Host,
    Port,
    Database,
}

impl FromStr for DraftField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "host" => Ok(DraftField::Host),
            "port" => Ok(DraftField::Port),
            "database" => Ok(DraftField::Database),
            other => Err(AppError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub nullable: bool,
    pub primary: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub name: String,
    pub row_count: u64,
    pub columns: Vec<Column>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub row_count: u64,
    pub column_count: usize,
    pub primary_key_count: usize,
    pub nullable_count: usize,
}

impl TableSummary {
    pub fn of(table: &Table) -> Self {
        Self {
            row_count: table.row_count,
            column_count: table.columns.len(),
            primary_key_count: table.columns.iter().filter(|c| c.primary).count(),
            nullable_count: table.columns.iter().filter(|c| c.nullable).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports_per_kind() {
        assert_eq!(DbKind::Postgresql.default_port(), 5432);
        assert_eq!(DbKind::Mysql.default_port(), 3306);
        assert_eq!(DbKind::Mongodb.default_port(), 27017);
    }

    #[test]
    fn kind_parses_wire_names_only() {
        assert_eq!("mysql".parse::<DbKind>().unwrap(), DbKind::Mysql);
        assert!(matches!("MySQL".parse::<DbKind>(), Err(AppError::UnknownKind(_))));
    }

    #[test]
    fn port_keeps_unparsable_text() {
        assert_eq!(Port::parse(" 5433 "), Port::Number(5433));
        assert_eq!(Port::parse("abc"), Port::Invalid("abc".to_string()));
        assert_eq!(Port::parse(""), Port::Invalid(String::new()));
        assert!(!Port::parse("54a").is_valid());
        assert_eq!(Port::parse("5433abc"), Port::Invalid("5433abc".to_string()));
    }

    #[test]
    fn draft_defaults() {
        let draft = Draft::default();
        assert_eq!(draft.kind, DbKind::Postgresql);
        assert_eq!(draft.port, "5432");
        assert!(draft.name.is_empty() && draft.host.is_empty() && draft.database.is_empty());
    }

    #[test]
    fn serializes_for_the_frontend() {
        let column = Column {
            name: "id".to_string(),
            data_type: "INTEGER".to_string(),
            nullable: false,
            primary: true,
        };
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "INTEGER");

        assert_eq!(serde_json::to_value(Port::Number(3306)).unwrap(), 3306);
        assert_eq!(serde_json::to_value(DbKind::Mongodb).unwrap(), "mongodb");
    }
}
