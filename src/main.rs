mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialise logging: {}", e)))?;

    let config = Config::from_env()?;
    let http_client = startup::setup_reqwest_client()?;
    let state = AppState::new(config, http_client)?;

    startup::report_missing_credentials(&state.config);

    let app = router::router(&state.config)?.with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind: {}", e)))?;

    tracing::info!("Starting server on {}", state.config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
