use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

/// Build an `AppState` from a bare database connection with the bundled
/// catalog. Used by the test utilities, which cannot depend on this crate.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            catalog: Arc::new(Catalog::bundled().expect("bundled catalog is valid JSON")),
        }
    }
}
