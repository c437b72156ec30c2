pub mod error;
pub mod logging;
pub mod models;
pub mod seed;
pub mod state;
pub mod views;
#[cfg(feature = "desktop")]
mod commands;

pub use error::{AppError, Result};
pub use state::AppState;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            commands::navigate,
            commands::get_landing,
            commands::list_connections,
            commands::get_connections_view,
            commands::begin_draft,
            commands::set_draft_field,
            commands::set_draft_kind,
            commands::close_dialog,
            commands::commit_draft,
            commands::list_tables,
            commands::select_table,
            commands::current_selection,
            commands::table_summary,
            commands::get_database_view
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
