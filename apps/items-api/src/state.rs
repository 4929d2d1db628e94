//! Application state shared by the route builders.

use database::postgres::DatabaseConnection;
use domain_items::InMemoryItemRepository;

/// Backing store selected at startup.
#[derive(Clone)]
pub enum Storage {
    Memory(InMemoryItemRepository),
    /// PostgreSQL connection pool
    Postgres(DatabaseConnection),
}

/// Shared application state.
///
/// Cloning is cheap: the in-memory store and the connection pool are both
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub storage: Storage,
}
