use sc_dashboard_protocol::{StatisticKey, StatisticsSnapshot, WorkerStatistics};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::series::sum_elements;

#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error("worker statistics have no `{key}` series")]
    MissingStatistic { key: StatisticKey },
    #[error("invalid statistics snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which family of message counters to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    Sent,
    Received,
}

impl MessageDirection {
    pub fn keys(self) -> &'static [StatisticKey] {
        match self {
            MessageDirection::Sent => &StatisticKey::SENT,
            MessageDirection::Received => &StatisticKey::RECEIVED,
        }
    }

    pub fn aggregate(self, snapshot: &StatisticsSnapshot) -> Result<Vec<f64>, StatisticsError> {
        sum_statistics(&snapshot.worker_statistics, self.keys())
    }
}

/// Decode a snapshot from its JSON wire form.
pub fn parse_snapshot(data: &[u8]) -> Result<StatisticsSnapshot, StatisticsError> {
    Ok(serde_json::from_slice(data)?)
}

/// Sum the series of every key in `keys`, element by element.
///
/// All keys are looked up before any arithmetic, so a missing series is
/// reported as [`StatisticsError::MissingStatistic`] rather than read as
/// zeros. The result starts at the length of the first key's series and
/// grows if a later series is longer.
pub fn sum_statistics(
    statistics: &WorkerStatistics,
    keys: &[StatisticKey],
) -> Result<Vec<f64>, StatisticsError> {
    let series = keys
        .iter()
        .map(|&key| {
            statistics
                .get(key.as_str())
                .map(|values| (key, values.as_slice()))
                .ok_or(StatisticsError::MissingStatistic { key })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(&(first_key, first)) = series.first() else {
        return Ok(Vec::new());
    };

    for &(key, values) in &series[1..] {
        if values.len() != first.len() {
            warn!(
                %first_key,
                %key,
                expected = first.len(),
                actual = values.len(),
                "statistic series length mismatch"
            );
        }
    }

    let mut sum = vec![0.0; first.len()];
    for (_, values) in &series {
        sum_elements(&mut sum, values);
    }
    debug!(keys = series.len(), len = sum.len(), "aggregated statistics");
    Ok(sum)
}

/// Total messages sent per interval, across nodes, workers, coordinator and
/// other destinations.
pub fn sum_message_sent(snapshot: &StatisticsSnapshot) -> Result<Vec<f64>, StatisticsError> {
    MessageDirection::Sent.aggregate(snapshot)
}

/// Total messages received per interval, across every message kind.
pub fn sum_message_received(snapshot: &StatisticsSnapshot) -> Result<Vec<f64>, StatisticsError> {
    MessageDirection::Received.aggregate(snapshot)
}

/// Both message aggregates of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageTotals {
    pub sent: Vec<f64>,
    pub received: Vec<f64>,
}

pub fn summarize(snapshot: &StatisticsSnapshot) -> Result<MessageTotals, StatisticsError> {
    Ok(MessageTotals {
        sent: sum_message_sent(snapshot)?,
        received: sum_message_received(snapshot)?,
    })
}
