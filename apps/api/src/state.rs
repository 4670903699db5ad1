use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::store::CsvStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The CSV-backed record store. Guarded by a Mutex so a mutation's
    /// load-modify-overwrite cycle is never interleaved with another
    /// in-process writer. Concurrent writers in other processes are not
    /// protected against; this is a single-user tool.
    pub store: Arc<Mutex<CsvStore>>,
    #[allow(dead_code)]
    pub config: Config,
}
