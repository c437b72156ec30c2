use serde::Serialize;

use crate::models::{Connection, ConnectionStatus, Draft};
use crate::state::ConnectionCatalog;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub label: &'static str,
    pub connected: bool,
}

impl From<ConnectionStatus> for StatusBadge {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Connected => StatusBadge {
                label: "Active",
                connected: true,
            },
            ConnectionStatus::Disconnected => StatusBadge {
                label: "Disconnected",
                connected: false,
            },
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCard {
    pub id: String,
    pub name: String,
    pub kind_label: String,
    pub icon: &'static str,
    pub status: StatusBadge,
    pub host: String,
    pub port: String,
    pub database: String,
    /// Rendered but inert.
    pub actions: [&'static str; 2],
}

impl From<&Connection> for ConnectionCard {
    fn from(conn: &Connection) -> Self {
        Self {
            id: conn.id.clone(),
            name: conn.name.clone(),
            kind_label: conn.kind.as_str().to_uppercase(),
            icon: "Database",
            status: conn.status.into(),
            host: conn.host.clone(),
            port: conn.port.to_string(),
            database: conn.database.clone(),
            actions: ["Connect", "Settings"],
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsView {
    pub title: &'static str,
    pub cards: Vec<ConnectionCard>,
    pub dialog_open: bool,
    pub draft: Draft,
}

pub fn connections_view(catalog: &ConnectionCatalog) -> ConnectionsView {
    ConnectionsView {
        title: "Connections",
        cards: catalog.list_connections().iter().map(ConnectionCard::from).collect(),
        dialog_open: catalog.is_dialog_open(),
        draft: catalog.draft().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftField;
    use crate::seed::seed_connections;

    #[test]
    fn cards_follow_catalog_order() {
        let catalog = ConnectionCatalog::new(seed_connections());
        let view = connections_view(&catalog);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].kind_label, "POSTGRESQL");
        assert_eq!(view.cards[0].status.label, "Active");
        assert_eq!(view.cards[1].port, "3306");
        assert!(!view.cards[1].status.connected);
        assert!(!view.dialog_open);
    }

    #[test]
    fn invalid_port_shows_raw_text() {
        let mut catalog = ConnectionCatalog::new(Vec::new());
        catalog.begin_draft();
        catalog.set_draft_field(DraftField::Port, "12ab");
        catalog.commit_draft();
        assert_eq!(connections_view(&catalog).cards[0].port, "12ab");
    }

    #[test]
    fn serializes_camel_case() {
        let catalog = ConnectionCatalog::new(seed_connections());
        let json = serde_json::to_value(connections_view(&catalog)).unwrap();
        assert_eq!(json["dialogOpen"], false);
        assert_eq!(json["cards"][1]["kindLabel"], "MYSQL");
        assert!(json["cards"][0].get("kind_label").is_none());
    }
}
