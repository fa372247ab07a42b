pub mod charts;
pub mod client;
pub mod legend;
pub mod palette;
pub mod sankey;
pub mod series;
pub mod statistics;
