use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::SankeyGraph;

const DATE_KEY: &str = "date";

/// One x-axis point of a line chart.
///
/// Serializes flat as `{"date": ..., "<series>": value, ...}`. A series that
/// is itself named `date` is left out so the label key stays unique.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub date: String,
    pub values: BTreeMap<String, f64>,
}

impl Serialize for SeriesRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<_> = self
            .values
            .iter()
            .filter(|(name, _)| name.as_str() != DATE_KEY)
            .collect();

        let mut map = serializer.serialize_map(Some(values.len() + 1))?;
        map.serialize_entry(DATE_KEY, &self.date)?;
        for (name, value) in values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Legend entry describing how one series is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSpec {
    pub key: String,
    pub name: String,
    pub color: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    /// Every period date available for the range pickers.
    pub dates: Vec<NaiveDate>,
    pub lines: Vec<LineSpec>,
    pub rows: Vec<SeriesRow>,
    pub stale: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SankeyChart {
    pub dates: Vec<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub graph: SankeyGraph,
    pub stale: bool,
}

/// Chart payload tagged with the graph type that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "graphType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartData {
    Line(LineChart),
    Sankey(SankeyChart),
    /// Same rows as a line chart, meant for tabular display.
    Table(LineChart),
}
