pub mod charts;
pub mod table;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Pages
        .route("/charts/table", get(table::index))
        // API (JSON for charts)
        .route("/api/charts", get(charts::chart))
        .route("/api/charts/line", get(charts::line))
        .route("/api/charts/sankey", get(charts::sankey))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
