use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_booking::{config::Config, controllers, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seat booking API");

    // Connect to the database once; every handler borrows this handle
    let app_state = AppState::new(config.clone())
        .await
        .expect("Failed to connect to database");
    info!("Database connected");

    // Create the main router
    let app = Router::new()
        .route("/", get(|| async { "Seat Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        // Pass the application state to the router
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port)
        .parse()
        .expect("HOST/PORT must form a valid listen address");
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
