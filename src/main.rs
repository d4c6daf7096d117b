use axum::http::{header, HeaderValue, Method};
use dotenvy::dotenv;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use voting_app::config::Config;
use voting_app::db::{connection, poll_store::PollStore};
use voting_app::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    let database = match connection::init_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Connected to MongoDB, using database {}", config.db_name);

    let state = AppState::new(PollStore::new(&database));

    let cors = match &config.cors_origin {
        Some(origin) => {
            let origin = origin.parse::<HeaderValue>().unwrap_or_else(|_| {
                error!("Failed to parse CORS origin: {}", origin);
                std::process::exit(1);
            });
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        }
        None => CorsLayer::permissive(),
    };

    // Hash-based client routing, so unknown paths still get index.html.
    let static_files = ServeDir::new("static").fallback(ServeFile::new("static/index.html"));

    let app = voting_app::app(state)
        .fallback_service(static_files)
        .layer(cors);

    let listener = match tokio::net::TcpListener::bind(config.server_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.server_addr, e);
            std::process::exit(1);
        }
    };
    info!("Server running at http://{}", config.server_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
