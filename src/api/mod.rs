mod chart;
mod config;
mod engine;
mod labels;
pub mod preview;

pub use chart::{Chart, format_scale_value};
pub use config::ChartConfig;
pub use engine::ChartEngine;
pub use labels::{CategoryLabels, IndexLabels, MonthAbbreviations};
