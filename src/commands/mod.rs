use tauri::State;

use crate::models::{Connection, DbKind, Draft, DraftField, Table, TableSummary};
use crate::state::AppState;
use crate::views::{self, ConnectionsView, DatabaseView, LandingView, Route};

#[tauri::command]
pub fn navigate(
    state: State<'_, AppState>,
    path: String,
) -> Result<Route, String> {
    let route = path.parse::<Route>().map_err(|e| e.to_string())?;
    state.navigate(route).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_landing() -> LandingView {
    views::landing_view()
}

#[tauri::command]
pub fn list_connections(
    state: State<'_, AppState>,
) -> Result<Vec<Connection>, String> {
    let catalog = state.connections().map_err(|e| e.to_string())?;
    Ok(catalog.list_connections().to_vec())
}

#[tauri::command]
pub fn get_connections_view(
    state: State<'_, AppState>,
) -> Result<ConnectionsView, String> {
    let catalog = state.connections().map_err(|e| e.to_string())?;
    Ok(views::connections_view(&catalog))
}

#[tauri::command]
pub fn begin_draft(
    state: State<'_, AppState>,
) -> Result<Draft, String> {
    let mut catalog = state.connections().map_err(|e| e.to_string())?;
    Ok(catalog.begin_draft().clone())
}

#[tauri::command]
pub fn set_draft_field(
    state: State<'_, AppState>,
    field: String,
    value: String,
) -> Result<Draft, String> {
    let field = field.parse::<DraftField>().map_err(|e| e.to_string())?;
    let mut catalog = state.connections().map_err(|e| e.to_string())?;
    catalog.set_draft_field(field, value);
    Ok(catalog.draft().clone())
}

#[tauri::command]
pub fn set_draft_kind(
    state: State<'_, AppState>,
    kind: String,
) -> Result<Draft, String> {
    let kind = kind.parse::<DbKind>().map_err(|e| e.to_string())?;
    let mut catalog = state.connections().map_err(|e| e.to_string())?;
    catalog.set_draft_kind(kind);
    Ok(catalog.draft().clone())
}

#[tauri::command]
pub fn close_dialog(
    state: State<'_, AppState>,
) -> Result<(), String> {
    let mut catalog = state.connections().map_err(|e| e.to_string())?;
    catalog.close_dialog();
    Ok(())
}

#[tauri::command]
pub fn commit_draft(
    state: State<'_, AppState>,
) -> Result<Connection, String> {
    let mut catalog = state.connections().map_err(|e| e.to_string())?;
    Ok(catalog.commit_draft())
}

#[tauri::command]
pub fn list_tables(
    state: State<'_, AppState>,
) -> Result<Vec<Table>, String> {
    let browser = state.browser().map_err(|e| e.to_string())?;
    Ok(browser.list_tables().to_vec())
}

#[tauri::command]
pub fn select_table(
    state: State<'_, AppState>,
    name: String,
) -> Result<Option<Table>, String> {
    let mut browser = state.browser().map_err(|e| e.to_string())?;
    Ok(browser.select_table(&name).cloned())
}

#[tauri::command]
pub fn current_selection(
    state: State<'_, AppState>,
) -> Result<Option<Table>, String> {
    let browser = state.browser().map_err(|e| e.to_string())?;
    Ok(browser.current_selection().cloned())
}

#[tauri::command]
pub fn table_summary(
    state: State<'_, AppState>,
) -> Result<Option<TableSummary>, String> {
    let browser = state.browser().map_err(|e| e.to_string())?;
    Ok(browser.table_summary())
}

#[tauri::command]
pub fn get_database_view(
    state: State<'_, AppState>,
) -> Result<DatabaseView, String> {
    let source = state
        .connections()
        .map_err(|e| e.to_string())?
        .list_connections()
        .first()
        .cloned();
    let browser = state.browser().map_err(|e| e.to_string())?;
    Ok(views::database_view(&browser, source.as_ref()))
}
