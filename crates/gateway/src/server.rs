use std::sync::Arc;

use {
    axum::{
        Router,
        extract::State,
        response::{Html, Json},
        routing::{get, post},
    },
    tower_http::cors::{Any, CorsLayer},
    tracing::info,
};

use crate::{chat::chat_handler, state::GatewayState};

/// Build the gateway router (shared between production startup and tests).
pub fn build_gateway_app(state: Arc<GatewayState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_gateway(bind: &str, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(GatewayState::from_env().await);
    info!(
        reddit_available = state.reddit_available,
        "starting gateway"
    );

    let app = build_gateway_app(state);
    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler(State(state): State<Arc<GatewayState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "reddit_available": state.reddit_available,
    }))
}

/// Serve the compiled-in single-file chat page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../assets/chat.html"))
}
