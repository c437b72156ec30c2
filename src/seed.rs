use crate::models::{Column, Connection, ConnectionStatus, DbKind, Port, Table};

/// Connections shown when the connections screen opens.
pub fn seed_connections() -> Vec<Connection> {
    vec![
        Connection {
            id: "1".to_string(),
            name: "Production DB".to_string(),
            kind: DbKind::Postgresql,
            host: "prod.example.com".to_string(),
            port: Port::Number(5432),
            database: "main_db".to_string(),
            status: ConnectionStatus::Connected,
        },
        Connection {
            id: "2".to_string(),
            name: "Development DB".to_string(),
            kind: DbKind::Mysql,
            host: "dev.example.com".to_string(),
            port: Port::Number(3306),
            database: "dev_db".to_string(),
            status: ConnectionStatus::Disconnected,
        },
    ]
}

fn column(name: &str, data_type: &str, nullable: bool, primary: bool) -> Column {
    Column {
        name: name.to_string(),
        data_type: data_type.to_string(),
        nullable,
        primary,
    }
}

/// Fixed table catalog for the database structure screen.
pub fn seed_tables() -> Vec<Table> {
    vec![
        Table {
            name: "users".to_string(),
            row_count: 12453,
            columns: vec![
                column("id", "INTEGER", false, true),
                column("email", "VARCHAR(255)", false, false),
                column("username", "VARCHAR(100)", false, false),
                column("created_at", "TIMESTAMP", false, false),
                column("updated_at", "TIMESTAMP", true, false),
            ],
        },
        Table {
            name: "products".to_string(),
            row_count: 8924,
            columns: vec![
                column("id", "INTEGER", false, true),
                column("title", "VARCHAR(255)", false, false),
                column("price", "DECIMAL(10,2)", false, false),
                column("stock", "INTEGER", false, false),
                column("category_id", "INTEGER", true, false),
            ],
        },
        Table {
            name: "orders".to_string(),
            row_count: 34521,
            columns: vec![
                column("id", "INTEGER", false, true),
                column("user_id", "INTEGER", false, false),
                column("total", "DECIMAL(10,2)", false, false),
                column("status", "VARCHAR(50)", false, false),
                column("created_at", "TIMESTAMP", false, false),
            ],
        },
    ]
}
