use crate::date_utils::filter_range;
use crate::models::{ChartContext, LineChart, SankeyChart};
use crate::params::ChartParams;
use crate::services::statistics::LoadedStatistics;
use crate::services::{legend, sankey, series};

pub fn line_chart(
    params: &ChartParams,
    context: &ChartContext,
    loaded: &LoadedStatistics,
) -> LineChart {
    let statistics = loaded.statistics.as_slice();
    let in_range = filter_range(statistics, params.line_start_date, params.line_end_date);

    LineChart {
        dates: statistics.iter().map(|s| s.date).collect(),
        lines: legend::lines(params.view_type, &params.hidden_items, context, statistics),
        rows: series::assemble(params.data_type, &params.hidden_items, &in_range),
        stale: loaded.stale,
    }
}

/// Sankey for the selected period, defaulting to the latest one.
pub fn sankey_chart(
    params: &ChartParams,
    context: &ChartContext,
    loaded: &LoadedStatistics,
) -> SankeyChart {
    let statistics = loaded.statistics.as_slice();
    let date = params
        .sankey_date
        .or_else(|| statistics.last().map(|s| s.date));
    let selected = date.and_then(|d| statistics.iter().find(|s| s.date == d));

    SankeyChart {
        dates: statistics.iter().map(|s| s.date).collect(),
        date,
        graph: sankey::synthesize(params.view_type, params.data_type, selected, context),
        stale: loaded.stale,
    }
}
