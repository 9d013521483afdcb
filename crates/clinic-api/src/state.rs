use std::sync::Arc;

use clinic_db::Database;

pub type AppState = Arc<AppStateInner>;

/// Everything a handler needs, injected through the router.
pub struct AppStateInner {
    pub db: Database,
}

impl AppStateInner {
    pub fn new(db: Database) -> AppState {
        Arc::new(Self { db })
    }
}
