//! View models handed to the front-end. They only describe what to show;
//! every state change goes through `crate::state`.

mod connections;
mod database;
mod landing;

pub use connections::{connections_view, ConnectionCard, ConnectionsView, StatusBadge};
pub use database::{database_view, ColumnRow, DatabaseHeader, DatabaseView, TableDetail, TableListItem};
pub use landing::{landing_view, LandingCard, LandingView, Route};

/// `12453` -> `12,453`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
