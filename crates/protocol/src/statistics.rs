use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-worker statistic series keyed by their wire name.
///
/// Each series is a time-ordered list of counts, one entry per sampling
/// interval. Keys the dashboard does not know about are kept as-is.
pub type WorkerStatistics = BTreeMap<String, Vec<f64>>;

/// A statistics snapshot as pushed to the dashboard by the console server.
///
/// ```json
/// { "workerStatistics": { "messagesSentToNodes": [3, 5, 8], ... } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub worker_statistics: WorkerStatistics,
}

impl StatisticsSnapshot {
    pub fn new(worker_statistics: WorkerStatistics) -> Self {
        Self { worker_statistics }
    }

    /// Look up the series for a known statistic.
    pub fn get(&self, key: StatisticKey) -> Option<&[f64]> {
        self.worker_statistics
            .get(key.as_str())
            .map(Vec::as_slice)
    }
}

/// The message counters the dashboard aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatisticKey {
    MessagesSentToNodes,
    MessagesSentToWorkers,
    MessagesSentToCoordinator,
    MessagesSentToOthers,
    OtherMessagesReceived,
    RequestMessagesReceived,
    SignalMessagesReceived,
    ReceiveTimeoutMessagesReceived,
    BulkSignalMessagesReceived,
    ContinueMessagesReceived,
    HeartbeatMessagesReceived,
}

impl StatisticKey {
    pub const SENT: [StatisticKey; 4] = [
        StatisticKey::MessagesSentToNodes,
        StatisticKey::MessagesSentToWorkers,
        StatisticKey::MessagesSentToCoordinator,
        StatisticKey::MessagesSentToOthers,
    ];

    pub const RECEIVED: [StatisticKey; 7] = [
        StatisticKey::OtherMessagesReceived,
        StatisticKey::RequestMessagesReceived,
        StatisticKey::SignalMessagesReceived,
        StatisticKey::ReceiveTimeoutMessagesReceived,
        StatisticKey::BulkSignalMessagesReceived,
        StatisticKey::ContinueMessagesReceived,
        StatisticKey::HeartbeatMessagesReceived,
    ];

    /// Wire name of the statistic inside `workerStatistics`.
    pub fn as_str(self) -> &'static str {
        match self {
            StatisticKey::MessagesSentToNodes => "messagesSentToNodes",
            StatisticKey::MessagesSentToWorkers => "messagesSentToWorkers",
            StatisticKey::MessagesSentToCoordinator => "messagesSentToCoordinator",
            StatisticKey::MessagesSentToOthers => "messagesSentToOthers",
            StatisticKey::OtherMessagesReceived => "otherMessagesReceived",
            StatisticKey::RequestMessagesReceived => "requestMessagesReceived",
            StatisticKey::SignalMessagesReceived => "signalMessagesReceived",
            StatisticKey::ReceiveTimeoutMessagesReceived => "receiveTimeoutMessagesReceived",
            StatisticKey::BulkSignalMessagesReceived => "bulkSignalMessagesReceived",
            StatisticKey::ContinueMessagesReceived => "continueMessagesReceived",
            StatisticKey::HeartbeatMessagesReceived => "heartbeatMessagesReceived",
        }
    }
}

impl fmt::Display for StatisticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
