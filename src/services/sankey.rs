use crate::filters::title_case;
use crate::models::{
    ChartContext, DataType, PeriodStatistic, SankeyGraph, SankeyLink, SankeyNode, TotalType,
    ViewType,
};
use crate::services::palette;

/// Number of fixed nodes ahead of the dimension nodes.
const HEAD_NODES: usize = 4;
const ASSET_ROOT: usize = 2;
const LIABILITY_ROOT: usize = 3;

/// Labels for the positive and negative side of a diagram.
fn side_labels(view_type: ViewType, data_type: DataType) -> (&'static str, &'static str) {
    match (view_type, data_type) {
        (ViewType::TotalBalance | ViewType::AccountBalance, DataType::Net) => {
            ("Assets", "Liabilities")
        }
        (ViewType::TotalBalance | ViewType::AccountBalance, DataType::Difference) => {
            ("Increase", "Decrease")
        }
        _ => ("Income", "Expense"),
    }
}

fn dimension_name(view_type: ViewType, name: &str, context: &ChartContext) -> String {
    if view_type.is_account_view() {
        context.account_title(name)
    } else {
        title_case(name)
    }
}

/// Build the Sankey graph for one period.
///
/// Positive values hang off the asset root (node 2), negative ones off the
/// liability root (node 3) with their magnitude. Zero values still get a
/// node but no link. Colors are assigned by position, so adding or removing
/// a dimension shifts the colors of every node after it.
pub fn synthesize(
    view_type: ViewType,
    data_type: DataType,
    statistic: Option<&PeriodStatistic>,
    context: &ChartContext,
) -> SankeyGraph {
    let Some(statistic) = statistic else {
        return SankeyGraph::placeholder();
    };

    // The NET total is the sum of the others and would be counted twice.
    let dimensions: Vec<_> = statistic
        .values
        .iter()
        .filter(|v| !(view_type.is_totals_view() && v.name == TotalType::Net.as_str()))
        .collect();

    let colors = palette::generate(HEAD_NODES + dimensions.len());
    let (asset, liability) = side_labels(view_type, data_type);

    let mut nodes: Vec<SankeyNode> = [
        format!("Total {asset}"),
        format!("Total {liability}"),
        asset.to_string(),
        liability.to_string(),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| SankeyNode {
        name,
        color: colors[i].clone(),
    })
    .collect();
    let mut links = Vec::new();

    let mut asset_total = 0.0;
    let mut liability_total = 0.0;

    for dimension in dimensions {
        let index = nodes.len();
        nodes.push(SankeyNode {
            name: dimension_name(view_type, &dimension.name, context),
            color: colors[index].clone(),
        });

        let value = data_type.pick(dimension);
        if value > 0.0 {
            asset_total += value;
            links.push(SankeyLink {
                source: ASSET_ROOT,
                target: index,
                value,
                color: colors[index].clone(),
            });
        } else if value < 0.0 {
            liability_total -= value;
            links.push(SankeyLink {
                source: LIABILITY_ROOT,
                target: index,
                value: -value,
                color: colors[index].clone(),
            });
        }
    }

    links.push(SankeyLink {
        source: 0,
        target: ASSET_ROOT,
        value: asset_total,
        color: colors[1].clone(),
    });
    links.push(SankeyLink {
        source: 1,
        target: LIABILITY_ROOT,
        value: liability_total,
        color: colors[2].clone(),
    });

    SankeyGraph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType, StatisticValue};
    use chrono::NaiveDate;

    fn value(name: &str, value: f64, value_difference: f64) -> StatisticValue {
        StatisticValue {
            name: name.into(),
            value,
            value_difference,
        }
    }

    fn cash_and_loan() -> PeriodStatistic {
        PeriodStatistic {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            values: vec![value("CASH", 100.0, 20.0), value("LOAN", -50.0, -10.0)],
        }
    }

    fn link_pairs(graph: &SankeyGraph) -> Vec<(usize, usize, f64)> {
        graph
            .links
            .iter()
            .map(|l| (l.source, l.target, l.value))
            .collect()
    }

    #[test]
    fn test_absent_statistic_is_placeholder() {
        let graph = synthesize(
            ViewType::FlowGrouping,
            DataType::Net,
            None,
            &ChartContext::default(),
        );
        assert_eq!(graph, SankeyGraph::placeholder());
    }

    #[test]
    fn test_cash_and_loan_balance_graph() {
        let stat = cash_and_loan();
        let graph = synthesize(
            ViewType::AccountBalance,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );

        let names: Vec<_> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Total Assets",
                "Total Liabilities",
                "Assets",
                "Liabilities",
                "CASH",
                "LOAN"
            ]
        );
        assert_eq!(
            link_pairs(&graph),
            vec![(2, 4, 100.0), (3, 5, 50.0), (0, 2, 100.0), (1, 3, 50.0)]
        );
    }

    #[test]
    fn test_balance_difference_labels() {
        let stat = cash_and_loan();
        let graph = synthesize(
            ViewType::TotalBalance,
            DataType::Difference,
            Some(&stat),
            &ChartContext::default(),
        );
        assert_eq!(graph.nodes[0].name, "Total Increase");
        assert_eq!(graph.nodes[3].name, "Decrease");
        assert_eq!(graph.nodes[4].name, "Cash");
        assert_eq!(
            link_pairs(&graph),
            vec![(2, 4, 20.0), (3, 5, 10.0), (0, 2, 20.0), (1, 3, 10.0)]
        );
    }

    #[test]
    fn test_transfer_views_use_income_and_expense() {
        let stat = cash_and_loan();
        for view in [
            ViewType::TotalTransfer,
            ViewType::AccountTransfer,
            ViewType::Flow,
            ViewType::FlowGrouping,
            ViewType::Expenses,
        ] {
            let graph = synthesize(view, DataType::Net, Some(&stat), &ChartContext::default());
            assert_eq!(graph.nodes[0].name, "Total Income");
            assert_eq!(graph.nodes[1].name, "Total Expense");
        }
    }

    #[test]
    fn test_totals_view_skips_net() {
        let stat = PeriodStatistic {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            values: vec![
                value("NET", 50.0, 0.0),
                value("CASH", 100.0, 0.0),
                value("LONG_TERM_LIABILITY", -50.0, 0.0),
            ],
        };
        let graph = synthesize(
            ViewType::TotalBalance,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );
        assert_eq!(graph.nodes.len(), 6);
        assert!(graph.nodes.iter().all(|n| n.name != "Net"));
        assert_eq!(graph.nodes[5].name, "Long Term Liability");

        // Flow grouping has no NET aggregate, a dimension of that name is kept.
        let grouping = synthesize(
            ViewType::FlowGrouping,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );
        assert_eq!(grouping.nodes.len(), 7);
    }

    #[test]
    fn test_zero_value_has_node_but_no_link() {
        let stat = PeriodStatistic {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            values: vec![value("CASH", 0.0, 0.0), value("GAIN", 5.0, 0.0)],
        };
        let graph = synthesize(
            ViewType::FlowGrouping,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );
        assert_eq!(graph.nodes.len(), 6);
        assert!(graph.links.iter().all(|l| l.target != 4));
        assert_eq!(graph.links.len(), 3);
    }

    #[test]
    fn test_totals_match_root_links() {
        let stat = PeriodStatistic {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            values: vec![
                value("A", 10.5, 0.0),
                value("B", -3.25, 0.0),
                value("C", 7.0, 0.0),
                value("D", -1.0, 0.0),
            ],
        };
        let graph = synthesize(
            ViewType::Expenses,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );
        let from = |source: usize| -> f64 {
            graph
                .links
                .iter()
                .filter(|l| l.source == source)
                .map(|l| l.value)
                .sum()
        };
        let aggregate = |source: usize, target: usize| -> f64 {
            graph
                .links
                .iter()
                .find(|l| l.source == source && l.target == target)
                .map(|l| l.value)
                .unwrap()
        };
        assert_eq!(from(2), 17.5);
        assert_eq!(aggregate(0, 2), 17.5);
        assert_eq!(from(3), 4.25);
        assert_eq!(aggregate(1, 3), 4.25);
        assert!(graph.links.iter().all(|l| l.value >= 0.0));
    }

    #[test]
    fn test_positional_colors() {
        let stat = cash_and_loan();
        let graph = synthesize(
            ViewType::FlowGrouping,
            DataType::Net,
            Some(&stat),
            &ChartContext::default(),
        );
        let colors = palette::generate(6);
        for (i, node) in graph.nodes.iter().enumerate() {
            assert_eq!(node.color, colors[i]);
        }
        assert_eq!(graph.links[0].color, colors[4]);
        assert_eq!(graph.links[2].color, colors[1]);
        assert_eq!(graph.links[3].color, colors[2]);
    }

    #[test]
    fn test_account_names_resolved_from_context() {
        let context = ChartContext::new(vec![Account {
            id: "CASH".into(),
            name: "Wallet".into(),
            account_type: AccountType::Checking,
        }]);
        let stat = cash_and_loan();
        let graph = synthesize(ViewType::AccountTransfer, DataType::Net, Some(&stat), &context);
        assert_eq!(graph.nodes[4].name, "Wallet (Checking)");
        assert_eq!(graph.nodes[5].name, "LOAN");
    }
}
