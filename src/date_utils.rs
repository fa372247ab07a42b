use chrono::NaiveDate;

use crate::models::PeriodStatistic;

/// Number of trailing periods shown when no start date is chosen.
pub const DEFAULT_PERIOD_COUNT: usize = 10;

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive calendar-date window applied to the line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// Fill in missing bounds from the statistics: the start defaults to the
    /// tenth-from-last period and the end to the last period. Returns `None`
    /// when a bound is missing and there are no periods to derive it from.
    pub fn resolve(
        statistics: &[PeriodStatistic],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<Self> {
        let from = match start {
            Some(date) => date,
            None => {
                let index = statistics.len().saturating_sub(DEFAULT_PERIOD_COUNT);
                statistics.get(index)?.date
            }
        };
        let to = match end {
            Some(date) => date,
            None => statistics.last()?.date,
        };
        Some(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Keep the periods inside the (possibly defaulted) window, in order.
///
/// An inverted window simply matches nothing.
pub fn filter_range(
    statistics: &[PeriodStatistic],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<PeriodStatistic> {
    let Some(window) = DateWindow::resolve(statistics, start, end) else {
        return Vec::new();
    };
    statistics
        .iter()
        .filter(|s| window.contains(s.date))
        .cloned()
        .collect()
}
