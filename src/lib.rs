pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, mongodb::error::Error> {
        let db = database::Database::connect(&config.database.uri, &config.database.name).await?;

        Ok(Arc::new(Self { db, config }))
    }
}
