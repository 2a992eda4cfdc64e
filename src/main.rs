use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use resort_booking::config::AppConfig;
use resort_booking::handlers;
use resort_booking::services::auth::static_credentials::StaticCredentials;
use resort_booking::services::controller::BookingController;
use resort_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(!config.admin_username.is_empty(), "ADMIN_USERNAME must not be empty");
    if config.admin_password == "password" {
        tracing::warn!("ADMIN_PASSWORD is the built-in default, set it before exposing this server");
    }

    let authenticator = StaticCredentials::new(config.admin_username.clone(), config.admin_password.clone());
    let state = Arc::new(AppState::new(BookingController::new(Box::new(authenticator))));

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
