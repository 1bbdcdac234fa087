use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use chat_organizer_backend::config::Config;
use chat_organizer_backend::handlers;
use chat_organizer_backend::services::{GeminiClient, OrganizerService};
use chat_organizer_backend::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();
    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; organize requests will fail");
    }

    let generator = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let state = Arc::new(AppState {
        organizer: OrganizerService::new(generator),
    });

    let app = handlers::router(state).layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_address);
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
