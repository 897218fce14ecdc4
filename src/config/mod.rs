use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_booking=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                uri: env::var("MONGO_URI").expect("MONGO_URI must be set"),
                name: env::var("MONGO_DB").unwrap_or_else(|_| "seat_booking".to_string()),
            },
        }
    }
}
