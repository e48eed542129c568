use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bind = env::var("EGAO_BIND").unwrap_or_else(|_| "127.0.0.1:8720".to_string());
    let model_id = env::var("EGAO_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());

    let aws = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let state = AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        aws,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalogue (public form schema data)
        .route("/catalogue", get(routes::catalogue::get_catalogue))
        // Operator sessions
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/{id}", get(routes::sessions::get_session))
        .route("/sessions/{id}/client", put(routes::sessions::put_client))
        .route("/sessions/{id}/adl", put(routes::sessions::put_adl))
        .route("/sessions/{id}/needs", put(routes::sessions::put_needs))
        // Scoring and plan generation
        .route("/sessions/{id}/scores", post(routes::scores::compute_scores))
        .route("/sessions/{id}/plan", post(routes::plans::generate_plan))
        .route("/sessions/{id}/plan", get(routes::plans::get_plan))
        // Export downloads
        .route(
            "/sessions/{id}/export/{format}",
            get(routes::exports::download_export),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "egao-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
