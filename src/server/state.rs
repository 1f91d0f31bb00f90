//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Page size used when a request does not specify `per_page`.
    pub default_page_size: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, default_page_size: u64) -> Self {
        Self {
            db,
            default_page_size,
        }
    }
}
