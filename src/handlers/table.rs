use askama::Template;
use axum::extract::{RawQuery, State};
use axum::response::Html;

use crate::error::{AppResult, RenderHtml};
use crate::filters::{format_amount, title_case};
use crate::handlers::charts::load_line;
use crate::models::{LineChart, ViewType};
use crate::params::{self, ChartParams};
use crate::state::AppState;
use crate::VERSION;

pub struct TableColumn {
    pub name: String,
    pub color: String,
    /// Link that hides this column.
    pub toggle_href: String,
}

pub struct TableRow {
    pub date: String,
    pub cells: Vec<String>,
}

pub struct HiddenSeries {
    pub name: String,
    pub show_href: String,
}

pub struct ViewLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "pages/table.html")]
pub struct TableTemplate {
    pub title: String,
    pub version: &'static str,
    pub stale: bool,
    pub views: Vec<ViewLink>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub hidden: Vec<HiddenSeries>,
}

pub async fn index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Html<String>> {
    let params = params::parse(query.as_deref().unwrap_or_default());
    let chart = load_line(&state, &params).await?;

    build_template(&params, chart).render_html()
}

fn href(params: &ChartParams) -> String {
    let query = params::serialize(params);
    if query.is_empty() {
        "/charts/table".to_string()
    } else {
        format!("/charts/table?{}", query)
    }
}

fn build_template(params: &ChartParams, chart: LineChart) -> TableTemplate {
    let (shown, hidden): (Vec<_>, Vec<_>) = chart.lines.into_iter().partition(|l| !l.hidden);

    let rows = chart
        .rows
        .iter()
        .map(|row| TableRow {
            date: row.date.clone(),
            cells: shown
                .iter()
                .map(|line| {
                    row.values
                        .get(&line.key)
                        .map(|v| format_amount(*v))
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect();

    let views = ViewType::all()
        .iter()
        .map(|view| ViewLink {
            label: title_case(view.as_str()),
            href: href(&params.with_view_type(*view)),
            active: *view == params.view_type,
        })
        .collect();

    TableTemplate {
        title: format!(
            "{} ({})",
            title_case(params.view_type.as_str()),
            title_case(params.data_type.as_str())
        ),
        version: VERSION,
        stale: chart.stale,
        views,
        columns: shown
            .into_iter()
            .map(|line| TableColumn {
                toggle_href: href(&params.toggle_hidden(&line.key)),
                name: line.name,
                color: line.color,
            })
            .collect(),
        rows,
        hidden: hidden
            .into_iter()
            .map(|line| HiddenSeries {
                show_href: href(&params.toggle_hidden(&line.key)),
                name: line.name,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineSpec, SeriesRow};
    use std::collections::BTreeMap;

    fn spec(key: &str, hidden: bool) -> LineSpec {
        LineSpec {
            key: key.into(),
            name: title_case(key),
            color: "#000000".into(),
            hidden,
        }
    }

    #[test]
    fn test_hidden_lines_become_show_links() {
        let params = ChartParams::default().toggle_hidden("GAIN");
        let chart = LineChart {
            dates: vec![],
            lines: vec![spec("CASH", false), spec("GAIN", true)],
            rows: vec![SeriesRow {
                date: "24-01-01".into(),
                values: BTreeMap::from([("CASH".to_string(), 1234.5)]),
            }],
            stale: false,
        };

        let template = build_template(&params, chart);
        assert_eq!(template.columns.len(), 1);
        assert_eq!(
            template.columns[0].toggle_href,
            "/charts/table?hiddenItems=CASH&hiddenItems=GAIN"
        );
        assert_eq!(template.rows[0].cells, vec!["1,234.50".to_string()]);
        assert_eq!(template.hidden.len(), 1);
        assert_eq!(template.hidden[0].show_href, "/charts/table");
    }

    #[test]
    fn test_view_links_reset_hidden_items() {
        let params = ChartParams::default().toggle_hidden("GAIN");
        let chart = LineChart {
            dates: vec![],
            lines: vec![],
            rows: vec![],
            stale: true,
        };
        let template = build_template(&params, chart);
        let total = template
            .views
            .iter()
            .find(|v| v.label == "Total Balance")
            .unwrap();
        assert_eq!(total.href, "/charts/table?viewType=TOTAL_BALANCE");
        assert!(template.views.iter().any(|v| v.active && v.label == "Flow Grouping"));
        assert!(template.stale);
    }
}
