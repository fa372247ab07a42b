pub mod account;
pub mod chart;
pub mod context;
pub mod sankey;
pub mod statistic;

pub use account::{Account, AccountType};
pub use chart::{ChartData, LineChart, LineSpec, SankeyChart, SeriesRow};
pub use context::ChartContext;
pub use sankey::{SankeyGraph, SankeyLink, SankeyNode};
pub use statistic::{
    DataType, DateType, FlowGroupingType, GraphType, PeriodStatistic, StatisticValue, TotalType,
    ViewType,
};
