//! Helpers behind the sc-dashboard console: statistic series arithmetic
//! plus viewport and string predicates.

pub mod series;
pub mod statistics;
pub mod text;
pub mod viewport;

pub use statistics::{
    MessageDirection, MessageTotals, StatisticsError, parse_snapshot, sum_message_received,
    sum_message_sent, sum_statistics, summarize,
};
