pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use state::AppState;

use crate::analyzer::LanguageModelClient;
use crate::error::ReviewError;
use std::sync::Arc;

/// Binds the listener and serves until Ctrl-C.
pub async fn serve(
    config: &ServiceConfig,
    llm_client: Arc<dyn LanguageModelClient>,
) -> Result<(), ReviewError> {
    config.validate()?;

    let state = AppState::new(llm_client, config.limits, config.llm.timeout());
    tracing::info!(
        max_body_bytes = state.limits.max_body_bytes(),
        "{}",
        state.orchestrator.get_model_info()
    );
    let router = build_router(state, &config.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        model = %config.llm.model_name,
        cors_origin = %config.cors_origin,
        "review service listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("review service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
