pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

use repositories::SqliteRegistrationRepository;
use services::{RegistrationService, Sha256SaltedHasher};

#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<RegistrationService>,
    pub pool: sqlx::SqlitePool,
}

impl AppState {
    /// Wires the SQLite repository and the default hasher onto a pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let repository = Arc::new(SqliteRegistrationRepository::new(pool.clone()));
        let registration_service = Arc::new(RegistrationService::new(
            repository,
            Arc::new(Sha256SaltedHasher::new()),
        ));

        Self {
            registration_service,
            pool,
        }
    }
}
