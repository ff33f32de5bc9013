use std::sync::Arc;

use tokio::sync::RwLock;
use todo_store::ItemStore;

use crate::config::ServerConfig;

/// The process-wide item store. Each handler holds the lock for one store call.
pub type SharedItemStore = Arc<RwLock<ItemStore>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory item store, constructed once at startup.
    pub store: SharedItemStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: ItemStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
