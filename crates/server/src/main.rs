use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::GenerateReplyRequest,
};
use tracing::{error, info};

mod config;
mod generator;

use config::load_settings;
use generator::{GenerateError, ReplyGenerator};

struct AppState {
    generator: ReplyGenerator,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    if settings.gemini_api_key.is_empty() {
        anyhow::bail!("GEMINI_API_KEY is required (environment or server.toml)");
    }

    let state = AppState {
        generator: ReplyGenerator::new(settings.gemini_api_url, settings.gemini_api_key),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "generation service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/email/generate", post(generate_reply))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Returns the generated reply as a plain-text body. Upstream detail stays in
/// the logs; the client maps every failure to one user-facing message anyway.
async fn generate_reply(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateReplyRequest>,
) -> Result<String, (StatusCode, Json<ApiError>)> {
    if request.email_content.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                ErrorCode::Validation,
                "emailContent cannot be empty",
            )),
        ));
    }

    state.generator.generate(&request).await.map_err(|err| {
        error!(%err, "reply generation failed");
        match err {
            GenerateError::MalformedResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, err.to_string())),
            ),
            err => (
                StatusCode::BAD_GATEWAY,
                Json(ApiError::new(ErrorCode::Upstream, err.to_string())),
            ),
        }
    })
}
