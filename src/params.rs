//! Chart state carried in the URL query string.
//!
//! Parameters equal to their default are left out of the serialized form so
//! shared links stay short, and `hiddenItems` repeats once per hidden series.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::date_utils::parse_iso_date;
use crate::models::{DataType, DateType, GraphType, ViewType};

const GRAPH_TYPE: &str = "graphType";
const VIEW_TYPE: &str = "viewType";
const DATE_TYPE: &str = "dateType";
const DATA_TYPE: &str = "dataType";
const HIDDEN_ITEMS: &str = "hiddenItems";
const LINE_START_DATE: &str = "lineStartDate";
const LINE_END_DATE: &str = "lineEndDate";
const SANKEY_DATE: &str = "sankeyDate";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartParams {
    pub graph_type: GraphType,
    pub view_type: ViewType,
    pub date_type: DateType,
    pub data_type: DataType,
    pub hidden_items: BTreeSet<String>,
    pub line_start_date: Option<NaiveDate>,
    pub line_end_date: Option<NaiveDate>,
    pub sankey_date: Option<NaiveDate>,
}

impl ChartParams {
    /// Flip the visibility of one series.
    pub fn toggle_hidden(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !next.hidden_items.remove(name) {
            next.hidden_items.insert(name.to_string());
        }
        next
    }

    /// Switch view; hidden items belong to the old view's series and are dropped.
    pub fn with_view_type(&self, view_type: ViewType) -> Self {
        let mut next = self.clone();
        if next.view_type != view_type {
            next.view_type = view_type;
            next.hidden_items.clear();
        }
        next
    }
}

/// Parse a query string (without the leading `?`).
///
/// Unknown keys are ignored. Unrecognised values fall back to the default.
pub fn parse(query: &str) -> ChartParams {
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!("Ignoring malformed chart query {:?}: {}", query, e);
            return ChartParams::default();
        }
    };

    let mut params = ChartParams::default();
    for (key, value) in pairs {
        match key.as_str() {
            GRAPH_TYPE => params.graph_type = enum_or_default(&key, &value, GraphType::parse),
            VIEW_TYPE => params.view_type = enum_or_default(&key, &value, ViewType::parse),
            DATE_TYPE => params.date_type = enum_or_default(&key, &value, DateType::parse),
            DATA_TYPE => params.data_type = enum_or_default(&key, &value, DataType::parse),
            HIDDEN_ITEMS => {
                if !value.is_empty() {
                    params.hidden_items.insert(value);
                }
            }
            LINE_START_DATE => params.line_start_date = date_or_none(&key, &value),
            LINE_END_DATE => params.line_end_date = date_or_none(&key, &value),
            SANKEY_DATE => params.sankey_date = date_or_none(&key, &value),
            _ => {}
        }
    }
    params
}

/// Serialize to a query string, omitting defaults.
pub fn serialize(params: &ChartParams) -> String {
    let defaults = ChartParams::default();
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if params.graph_type != defaults.graph_type {
        pairs.push((GRAPH_TYPE, params.graph_type.as_str().to_string()));
    }
    if params.view_type != defaults.view_type {
        pairs.push((VIEW_TYPE, params.view_type.as_str().to_string()));
    }
    if params.date_type != defaults.date_type {
        pairs.push((DATE_TYPE, params.date_type.as_str().to_string()));
    }
    if params.data_type != defaults.data_type {
        pairs.push((DATA_TYPE, params.data_type.as_str().to_string()));
    }
    for item in &params.hidden_items {
        pairs.push((HIDDEN_ITEMS, item.clone()));
    }
    for (key, date) in [
        (LINE_START_DATE, params.line_start_date),
        (LINE_END_DATE, params.line_end_date),
        (SANKEY_DATE, params.sankey_date),
    ] {
        if let Some(date) = date {
            pairs.push((key, date.format("%Y-%m-%d").to_string()));
        }
    }

    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

fn enum_or_default<T: Default>(key: &str, value: &str, parse: fn(&str) -> Option<T>) -> T {
    parse(value).unwrap_or_else(|| {
        tracing::warn!("Unknown {} value {:?}, using default", key, value);
        T::default()
    })
}

fn date_or_none(key: &str, value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    let date = parse_iso_date(value);
    if date.is_none() {
        tracing::warn!("Ignoring malformed {} {:?}", key, value);
    }
    date
}
