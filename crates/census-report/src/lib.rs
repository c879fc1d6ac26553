//! Descriptive analysis of refined census data: label-mapped frequency
//! counts, cross-tabulations, filtered sub-distributions, console tables,
//! and chart rendering.

pub mod chart;
pub mod counts;
pub mod crosstab;
pub mod render;

pub use chart::{ChartKind, render_chart};
pub use counts::{LabelledCounts, filtered_counts, labelled_counts};
pub use crosstab::{CrossTab, cross_tabulate};
pub use render::{counts_table, crosstab_table};
