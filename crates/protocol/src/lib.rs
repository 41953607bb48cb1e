pub mod statistics;
pub mod types;

pub use statistics::{StatisticKey, StatisticsSnapshot, WorkerStatistics};
pub use types::{ElementRect, ViewportSize};
