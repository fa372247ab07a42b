use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tracked dimension (account, total type, flow grouping or expense
/// category) within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticValue {
    pub name: String,
    pub value: f64,
    pub value_difference: f64,
}

/// Statistics for a single week, month or year as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatistic {
    pub date: NaiveDate,
    pub values: Vec<StatisticValue>,
}

impl PeriodStatistic {
    /// Compact x-axis label: the ISO date without its first two characters.
    pub fn date_label(&self) -> String {
        let iso = self.date.format("%Y-%m-%d").to_string();
        iso.get(2..).unwrap_or_default().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewType {
    TotalBalance,
    TotalTransfer,
    AccountBalance,
    AccountTransfer,
    Flow,
    #[default]
    FlowGrouping,
    Expenses,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalBalance => "TOTAL_BALANCE",
            Self::TotalTransfer => "TOTAL_TRANSFER",
            Self::AccountBalance => "ACCOUNT_BALANCE",
            Self::AccountTransfer => "ACCOUNT_TRANSFER",
            Self::Flow => "FLOW",
            Self::FlowGrouping => "FLOW_GROUPING",
            Self::Expenses => "EXPENSES",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }

    /// Path segment of the backend statistics endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::TotalBalance => "total_balance",
            Self::TotalTransfer => "total_transfer",
            Self::AccountBalance => "account_balance",
            Self::AccountTransfer => "account_transfer",
            Self::Flow => "flow",
            Self::FlowGrouping => "flow_grouping",
            Self::Expenses => "expenses",
        }
    }

    pub fn is_account_view(&self) -> bool {
        matches!(self, Self::AccountBalance | Self::AccountTransfer)
    }

    /// Views whose values are keyed by [`TotalType`], including the `NET` aggregate.
    pub fn is_totals_view(&self) -> bool {
        matches!(self, Self::TotalBalance | Self::TotalTransfer | Self::Flow)
    }

    pub fn all() -> &'static [ViewType] {
        &[
            Self::TotalBalance,
            Self::TotalTransfer,
            Self::AccountBalance,
            Self::AccountTransfer,
            Self::Flow,
            Self::FlowGrouping,
            Self::Expenses,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateType {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl DateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WEEKLY" => Some(Self::Weekly),
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Net,
    #[default]
    Difference,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Net => "NET",
            Self::Difference => "DIFFERENCE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NET" => Some(Self::Net),
            "DIFFERENCE" => Some(Self::Difference),
            _ => None,
        }
    }

    /// Projects a value onto the field this data type reads.
    pub fn pick(&self, value: &StatisticValue) -> f64 {
        match self {
            Self::Net => value.value,
            Self::Difference => value.value_difference,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraphType {
    #[default]
    Line,
    Sankey,
    Table,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "LINE",
            Self::Sankey => "SANKEY",
            Self::Table => "TABLE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LINE" => Some(Self::Line),
            "SANKEY" => Some(Self::Sankey),
            "TABLE" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Buckets reported by the total balance, total transfer and flow views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalType {
    Net,
    Cash,
    ShortTermAsset,
    LongTermAsset,
    PhysicalAsset,
    RetirementAsset,
    ShortTermLiability,
    LongTermLiability,
}

impl TotalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Net => "NET",
            Self::Cash => "CASH",
            Self::ShortTermAsset => "SHORT_TERM_ASSET",
            Self::LongTermAsset => "LONG_TERM_ASSET",
            Self::PhysicalAsset => "PHYSICAL_ASSET",
            Self::RetirementAsset => "RETIREMENT_ASSET",
            Self::ShortTermLiability => "SHORT_TERM_LIABILITY",
            Self::LongTermLiability => "LONG_TERM_LIABILITY",
        }
    }

    pub fn all() -> &'static [TotalType] {
        &[
            Self::Net,
            Self::Cash,
            Self::ShortTermAsset,
            Self::LongTermAsset,
            Self::PhysicalAsset,
            Self::RetirementAsset,
            Self::ShortTermLiability,
            Self::LongTermLiability,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowGroupingType {
    External,
    Cash,
    Gain,
    Retirement,
    Appreciation,
    Interest,
}

impl FlowGroupingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::External => "EXTERNAL",
            Self::Cash => "CASH",
            Self::Gain => "GAIN",
            Self::Retirement => "RETIREMENT",
            Self::Appreciation => "APPRECIATION",
            Self::Interest => "INTEREST",
        }
    }

    pub fn all() -> &'static [FlowGroupingType] {
        &[
            Self::External,
            Self::Cash,
            Self::Gain,
            Self::Retirement,
            Self::Appreciation,
            Self::Interest,
        ]
    }
}
