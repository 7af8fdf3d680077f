use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::config::SmsConfig;
use crate::error::ServerError;
use crate::handler;
use crate::todo::TodoStore;
use crate::twiml::MessagingResponse;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

/// Form fields posted by the messaging gateway. Only `Body` drives the
/// todo list; `From` is recorded for tracing and everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From")]
    pub from: Option<String>,
}

/// Builds the router: `POST {webhook_path}` for inbound SMS and `GET /health`.
pub fn router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, post(handle_sms))
        .route("/health", get(health))
        .with_state(state)
}

/// Starts the SMS webhook HTTP server and runs until SIGINT or SIGTERM.
pub async fn serve(config: SmsConfig, store: Arc<TodoStore>) -> Result<(), ServerError> {
    let app = router(AppState { store }, &config.webhook_path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(addr = %addr, path = %config.webhook_path, "SMS webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("SMS webhook server stopped");
    Ok(())
}

#[instrument(
    name = "sms.webhook",
    skip_all,
    fields(
        command = tracing::field::Empty,
        from = tracing::field::Empty,
    )
)]
async fn handle_sms(
    State(state): State<AppState>,
    Form(message): Form<InboundMessage>,
) -> MessagingResponse {
    if let Some(from) = &message.from {
        tracing::Span::current().record("from", from.as_str());
    }
    debug!(body = %message.body, "Received SMS");

    let reply = handler::handle(&state.store, &message.body);
    MessagingResponse::new().message(reply.to_string())
}

async fn health() -> &'static str {
    "ok"
}

/// Resolves on SIGINT, or SIGTERM on Unix, so `docker stop` shuts down cleanly.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = sigterm => info!("Received SIGTERM, shutting down"),
    }
}
