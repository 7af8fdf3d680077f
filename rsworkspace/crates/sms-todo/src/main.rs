use std::sync::Arc;

use sms_todo::env::SystemEnv;
use sms_todo::{SmsConfig, TodoStore, serve};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = SmsConfig::from_env(&SystemEnv);

    if let Err(e) = serve(config, Arc::new(TodoStore::new())).await {
        tracing::error!(error = %e, "SMS webhook server exited with error");
        std::process::exit(1);
    }
}
