use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Connection, ConnectionStatus, DbKind, Draft, DraftField, Port};

/// Connections screen state: the saved connections plus the add-connection form.
pub struct ConnectionCatalog {
    connections: Vec<Connection>,
    draft: Draft,
    dialog_open: bool,
}

impl ConnectionCatalog {
    pub fn new(seed: Vec<Connection>) -> Self {
        Self {
            connections: seed,
            draft: Draft::default(),
            dialog_open: false,
        }
    }

    /// Insertion order, seeds first.
    pub fn list_connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn begin_draft(&mut self) -> &Draft {
        self.draft = Draft::default();
        self.dialog_open = true;
        &self.draft
    }

    /// Stores the value as typed. Nothing is validated here or at commit.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        debug!(?field, %value, "draft field updated");
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Host => self.draft.host = value,
            DraftField::Port => self.draft.port = value,
            DraftField::Database => self.draft.database = value,
        }
    }

    /// Changing the kind always overwrites the port with the kind's default.
    pub fn set_draft_kind(&mut self, kind: DbKind) {
        debug!(%kind, "draft kind changed");
        self.draft.kind = kind;
        self.draft.port = kind.default_port().to_string();
    }

    /// Hides the dialog; whatever was typed stays in the draft.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn commit_draft(&mut self) -> Connection {
        let draft = std::mem::take(&mut self.draft);
        let connection = Connection {
            id: self.next_id(),
            name: draft.name,
            kind: draft.kind,
            host: draft.host,
            port: Port::parse(&draft.port),
            database: draft.database,
            status: ConnectionStatus::Disconnected,
        };

        info!(id = %connection.id, name = %connection.name, kind = %connection.kind, port = %connection.port, "connection added");
        self.connections.push(connection.clone());
        self.dialog_open = false;
        connection
    }

    /// Time-ordered, so later commits sort after earlier ones.
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.connections.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_connections;
    use std::collections::HashSet;

    #[test]
    fn commits_append_with_distinct_ids() {
        let mut catalog = ConnectionCatalog::new(seed_connections());
        for i in 0..10 {
            catalog.begin_draft();
            catalog.set_draft_field(DraftField::Name, format!("conn {}", i));
            catalog.commit_draft();
        }

        let list = catalog.list_connections();
        assert_eq!(list.len(), 12);
        assert_eq!(list[2].name, "conn 0");
        assert_eq!(list[11].name, "conn 9");
        let ids: HashSet<_> = list.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn committed_ids_sort_in_insertion_order() {
        let mut catalog = ConnectionCatalog::new(seed_connections());
        for _ in 0..20 {
            catalog.begin_draft();
            catalog.commit_draft();
        }

        let ids: Vec<_> = catalog.list_connections()[2..].iter().map(|c| c.id.clone()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn kind_change_overwrites_typed_port() {
        let mut catalog = ConnectionCatalog::new(Vec::new());
        catalog.begin_draft();
        catalog.set_draft_field(DraftField::Port, "9999");
        catalog.set_draft_kind(DbKind::Mysql);
        assert_eq!(catalog.draft().port, "3306");
        catalog.set_draft_field(DraftField::Port, "1234");
        catalog.set_draft_kind(DbKind::Mongodb);
        assert_eq!(catalog.draft().port, "27017");
        catalog.set_draft_kind(DbKind::Postgresql);
        assert_eq!(catalog.draft().port, "5432");
    }

    #[test]
    fn commit_resets_draft_and_closes_dialog() {
        let mut catalog = ConnectionCatalog::new(Vec::new());
        catalog.begin_draft();
        assert!(catalog.is_dialog_open());
        catalog.set_draft_field(DraftField::Host, "db.local");
        catalog.set_draft_kind(DbKind::Mysql);

        let committed = catalog.commit_draft();
        assert_eq!(committed.host, "db.local");
        assert_eq!(committed.port, Port::Number(3306));
        assert_eq!(committed.status, ConnectionStatus::Disconnected);
        assert!(!catalog.is_dialog_open());
        assert_eq!(catalog.draft(), &Draft::default());
    }

    #[test]
    fn unparsable_port_is_carried_through() {
        let mut catalog = ConnectionCatalog::new(Vec::new());
        catalog.begin_draft();
        catalog.set_draft_field(DraftField::Port, "fivefourthreetwo");
        let committed = catalog.commit_draft();
        assert_eq!(committed.port, Port::Invalid("fivefourthreetwo".to_string()));
    }

    #[test]
    fn closing_keeps_typed_values_and_begin_resets() {
        let mut catalog = ConnectionCatalog::new(Vec::new());
        catalog.begin_draft();
        catalog.set_draft_field(DraftField::Name, "half typed");
        catalog.close_dialog();
        assert!(!catalog.is_dialog_open());
        assert_eq!(catalog.draft().name, "half typed");
        assert!(catalog.list_connections().is_empty());

        catalog.begin_draft();
        assert_eq!(catalog.draft().name, "");
    }
}
