use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error_pages::{error_page_middleware, fallback_handler};
use crate::handlers;
use crate::models::ChartContext;
use crate::services::client::StatisticsClient;
use crate::state::AppState;

/// Build the application state and Axum router from a [`Config`].
///
/// Loads the account list from the backend; if that fails the service still
/// starts and account views reload the list on demand.
pub async fn build_app(config: Config) -> Result<(AppState, Router), Box<dyn std::error::Error>> {
    let client = StatisticsClient::new(&config.backend_url, config.request_timeout)?;

    let accounts = match client.fetch_accounts().await {
        Ok(accounts) => {
            tracing::info!("Loaded {} accounts from {}", accounts.len(), client.base_url());
            accounts
        }
        Err(e) => {
            tracing::warn!("Could not load accounts, starting without them: {}", e);
            Vec::new()
        }
    };

    let state = AppState::new(client, ChartContext::new(accounts));

    let app = router(state.clone());

    Ok((state, app))
}

/// Router with the full middleware stack around an existing state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .fallback(fallback_handler)
        .layer(middleware::from_fn(error_page_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the router to `host:port` and spawn the server as a tokio task.
///
/// Returns the actual port the server bound to (useful when `port` is 0 for
/// OS-assigned ports) and a [`JoinHandle`] for the server task.
pub async fn serve(
    app: Router,
    host: &str,
    port: u16,
) -> Result<(u16, JoinHandle<()>), Box<dyn std::error::Error>> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((actual_port, handle))
}
