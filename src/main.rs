use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use empower_ideas::api::handlers::ideas;
use empower_ideas::api::handlers::AppState;
use empower_ideas::config::Config;
use empower_ideas::llm::OpenAiClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Failed to load configuration");

    // Construct the provider client once for the process lifetime
    let provider = Arc::new(OpenAiClient::new(
        &config.api_base,
        &config.api_key,
        &config.completion_model,
        &config.image_model,
    ));
    tracing::info!(
        completion_model = %config.completion_model,
        image_model = %config.image_model,
        "provider client ready"
    );

    let state = AppState::new(provider, config.submit_delay);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // The single-page form
        .route("/", get(ideas::index))
        // Health check
        .route("/health", get(ideas::health_check))
        // Submission endpoint
        .route("/api/ideas", post(ideas::submit_ideas))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
