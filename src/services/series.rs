use std::collections::{BTreeMap, BTreeSet};

use crate::models::{DataType, PeriodStatistic, SeriesRow};

/// Extract the visible `name -> value` mapping of one period.
///
/// Names in `hidden` are left out entirely. When a name appears twice in
/// one period the later entry wins.
pub fn select(
    hidden: &BTreeSet<String>,
    statistic: &PeriodStatistic,
    data_type: DataType,
) -> BTreeMap<String, f64> {
    statistic
        .values
        .iter()
        .filter(|v| !hidden.contains(&v.name))
        .map(|v| (v.name.clone(), data_type.pick(v)))
        .collect()
}

/// Build chart rows for each period, preserving input order.
pub fn assemble(
    data_type: DataType,
    hidden: &BTreeSet<String>,
    statistics: &[PeriodStatistic],
) -> Vec<SeriesRow> {
    statistics
        .iter()
        .map(|statistic| SeriesRow {
            date: statistic.date_label(),
            values: select(hidden, statistic, data_type),
        })
        .collect()
}
