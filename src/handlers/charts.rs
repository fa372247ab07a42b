use axum::extract::{RawQuery, State};
use axum::Json;

use crate::error::AppResult;
use crate::models::{ChartData, GraphType, LineChart, SankeyChart};
use crate::params::{self, ChartParams};
use crate::services::charts::{line_chart, sankey_chart};
use crate::services::statistics::{load_context, load_statistics};
use crate::state::AppState;

/// Chart for whichever `graphType` the query selects.
///
/// `TABLE` carries the same rows as `LINE`; the HTML rendering of it lives at
/// `/charts/table`.
pub async fn chart(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<ChartData>> {
    let params = params::parse(query.as_deref().unwrap_or_default());

    let data = match params.graph_type {
        GraphType::Line => ChartData::Line(load_line(&state, &params).await?),
        GraphType::Sankey => ChartData::Sankey(load_sankey(&state, &params).await?),
        GraphType::Table => ChartData::Table(load_line(&state, &params).await?),
    };
    Ok(Json(data))
}

pub async fn line(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<LineChart>> {
    let params = params::parse(query.as_deref().unwrap_or_default());
    Ok(Json(load_line(&state, &params).await?))
}

pub async fn sankey(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<SankeyChart>> {
    let params = params::parse(query.as_deref().unwrap_or_default());
    Ok(Json(load_sankey(&state, &params).await?))
}

pub(crate) async fn load_line(state: &AppState, params: &ChartParams) -> AppResult<LineChart> {
    let loaded = load_statistics(state, params.date_type, params.view_type).await?;
    let context = load_context(state, params.view_type, &loaded.statistics).await;

    Ok(line_chart(params, &context, &loaded))
}

async fn load_sankey(state: &AppState, params: &ChartParams) -> AppResult<SankeyChart> {
    let loaded = load_statistics(state, params.date_type, params.view_type).await?;
    let context = load_context(state, params.view_type, &loaded.statistics).await;

    Ok(sankey_chart(params, &context, &loaded))
}
