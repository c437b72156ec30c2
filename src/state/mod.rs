use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::error::{AppError, Result};
use crate::seed::{seed_connections, seed_tables};
use crate::views::Route;

mod connections;
mod tables;

pub use connections::ConnectionCatalog;
pub use tables::TableBrowser;

pub struct AppState {
    pub connections: Mutex<ConnectionCatalog>,
    pub browser: Mutex<TableBrowser>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(ConnectionCatalog::new(seed_connections())),
            browser: Mutex::new(TableBrowser::new(seed_tables())),
        }
    }

    pub fn connections(&self) -> Result<MutexGuard<'_, ConnectionCatalog>> {
        self.connections
            .lock()
            .map_err(|_| AppError::StatePoisoned("connections"))
    }

    pub fn browser(&self) -> Result<MutexGuard<'_, TableBrowser>> {
        self.browser
            .lock()
            .map_err(|_| AppError::StatePoisoned("browser"))
    }

    /// Entering a screen starts it over from the seed data.
    pub fn navigate(&self, route: Route) -> Result<Route> {
        match route {
            Route::Landing => {}
            Route::Connections => {
                *self.connections()? = ConnectionCatalog::new(seed_connections());
            }
            Route::Database => {
                *self.browser()? = TableBrowser::new(seed_tables());
            }
        }
        info!(path = route.path(), "navigated");
        Ok(route)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftField;

    #[test]
    fn navigation_reseeds_the_entered_screen_only() {
        let state = AppState::new();
        {
            let mut catalog = state.connections().unwrap();
            catalog.begin_draft();
            catalog.set_draft_field(DraftField::Name, "temp");
            catalog.commit_draft();
        }
        state.browser().unwrap().select_table("users");

        state.navigate(Route::Database).unwrap();
        assert!(state.browser().unwrap().current_selection().is_none());
        assert_eq!(state.connections().unwrap().list_connections().len(), 3);

        state.navigate(Route::Connections).unwrap();
        assert_eq!(state.connections().unwrap().list_connections().len(), 2);
    }

    #[test]
    fn landing_touches_nothing() {
        let state = AppState::new();
        state.browser().unwrap().select_table("orders");
        state.navigate(Route::Landing).unwrap();
        assert!(state.browser().unwrap().current_selection().is_some());
    }
}
