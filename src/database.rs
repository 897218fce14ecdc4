use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use tracing::info;

use crate::models::{Seat, User};

#[derive(Debug, Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;

        // Ping to verify the connection before serving traffic
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!("Successfully connected to MongoDB");

        let db = client.database(db_name);

        Ok(Self { db })
    }

    pub fn seats(&self) -> Collection<Seat> {
        self.db.collection("seats")
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }
}
