use std::collections::BTreeSet;

use crate::filters::title_case;
use crate::models::{
    ChartContext, FlowGroupingType, LineSpec, PeriodStatistic, TotalType, ViewType,
};
use crate::services::palette;

/// Stroke used for series the user has hidden from the legend.
pub const HIDDEN_COLOR: &str = "#010101";

/// Legend entries for every series a view can show, hidden ones included.
///
/// Expense categories are not a fixed set, so that view derives its series
/// from the names present in `statistics`. Account views list the known
/// accounts followed by any unknown ids found in `statistics`.
pub fn lines(
    view_type: ViewType,
    hidden: &BTreeSet<String>,
    context: &ChartContext,
    statistics: &[PeriodStatistic],
) -> Vec<LineSpec> {
    // (series key, display name) pairs, palette size, first palette index used
    let (entries, palette_size, offset): (Vec<(String, String)>, usize, usize) = match view_type {
        ViewType::TotalBalance | ViewType::Flow => {
            (total_entries(), TotalType::all().len() + 1, 1)
        }
        ViewType::TotalTransfer => (total_entries(), TotalType::all().len() + 1, 0),
        ViewType::AccountBalance | ViewType::AccountTransfer => {
            let mut entries: Vec<_> = context
                .accounts()
                .iter()
                .map(|a| (a.id.clone(), a.title()))
                .collect();
            // Ids the lookup does not know still get a line under their raw id.
            entries.extend(
                dimension_names(statistics)
                    .into_iter()
                    .filter(|name| context.account(name).is_none())
                    .map(|name| {
                        let title = context.account_title(&name);
                        (name, title)
                    }),
            );
            let size = entries.len();
            (entries, size, 0)
        }
        ViewType::FlowGrouping => {
            let entries = FlowGroupingType::all()
                .iter()
                .map(|f| (f.as_str().to_string(), title_case(f.as_str())))
                .collect();
            (entries, FlowGroupingType::all().len() + 1, 1)
        }
        ViewType::Expenses => {
            let entries: Vec<_> = dimension_names(statistics)
                .into_iter()
                .map(|name| {
                    let display = title_case(&name);
                    (name, display)
                })
                .collect();
            let size = entries.len();
            (entries, size, 0)
        }
    };

    let colors = palette::generate(palette_size);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (key, name))| {
            let is_hidden = hidden.contains(&key);
            let color = if is_hidden {
                HIDDEN_COLOR.to_string()
            } else {
                colors[i + offset].clone()
            };
            LineSpec {
                key,
                name,
                color,
                hidden: is_hidden,
            }
        })
        .collect()
}

fn total_entries() -> Vec<(String, String)> {
    TotalType::all()
        .iter()
        .map(|t| (t.as_str().to_string(), title_case(t.as_str())))
        .collect()
}

/// Distinct dimension names in order of first appearance.
fn dimension_names(statistics: &[PeriodStatistic]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::new();
    for value in statistics.iter().flat_map(|s| s.values.iter()) {
        if seen.insert(value.name.as_str()) {
            names.push(value.name.clone());
        }
    }
    names
}
