//! Integration test: decode a console statistics snapshot and aggregate the
//! message counters the dashboard charts.

use sc_dashboard_core::{
    MessageDirection, StatisticsError, parse_snapshot, sum_message_received, sum_message_sent,
    summarize,
};
use sc_dashboard_protocol::StatisticKey;

const SNAPSHOT: &[u8] = include_bytes!("fixtures/worker-statistics.json");

#[test]
fn aggregates_sent_and_received_messages() {
    let snapshot = parse_snapshot(SNAPSHOT).expect("failed to parse snapshot");

    assert_eq!(
        sum_message_sent(&snapshot).unwrap(),
        vec![11.0, 23.0, 35.0]
    );
    assert_eq!(
        sum_message_received(&snapshot).unwrap(),
        vec![109.0, 213.0, 318.0]
    );
}

#[test]
fn summarize_matches_individual_aggregates() {
    let snapshot = parse_snapshot(SNAPSHOT).unwrap();
    let totals = summarize(&snapshot).unwrap();

    assert_eq!(totals.sent, MessageDirection::Sent.aggregate(&snapshot).unwrap());
    assert_eq!(
        totals.received,
        MessageDirection::Received.aggregate(&snapshot).unwrap()
    );

    let json = serde_json::to_value(&totals).unwrap();
    assert_eq!(json["sent"][2], 35.0);
}

#[test]
fn output_length_follows_first_series() {
    let snapshot = parse_snapshot(SNAPSHOT).unwrap();
    let first = snapshot
        .get(StatisticKey::MessagesSentToNodes)
        .map(<[f64]>::len);
    assert_eq!(Some(sum_message_sent(&snapshot).unwrap().len()), first);
}

#[test]
fn dropped_counter_fails_received_but_not_sent() {
    let mut snapshot = parse_snapshot(SNAPSHOT).unwrap();
    snapshot
        .worker_statistics
        .remove(StatisticKey::ContinueMessagesReceived.as_str());

    assert!(sum_message_sent(&snapshot).is_ok());
    assert!(matches!(
        sum_message_received(&snapshot),
        Err(StatisticsError::MissingStatistic {
            key: StatisticKey::ContinueMessagesReceived
        })
    ));
    assert!(summarize(&snapshot).is_err());
}
