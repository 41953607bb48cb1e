use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use sc_dashboard_core::{MessageDirection, StatisticsError, summarize};
use sc_dashboard_protocol::StatisticsSnapshot;

use crate::Format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Sent,
    Received,
    Both,
}

/// Aggregate `snapshot` and write the series to `out`.
///
/// Text output is one line per direction, `label: v0 v1 v2 ...`. JSON output
/// is an object keyed by direction.
pub fn write_report<W: Write>(
    out: &mut W,
    snapshot: &StatisticsSnapshot,
    direction: Direction,
    format: Format,
) -> Result<()> {
    let rows = aggregate(snapshot, direction)?;
    match format {
        Format::Text => {
            for (label, values) in &rows {
                let values: Vec<String> = values.iter().map(f64::to_string).collect();
                writeln!(out, "{label}: {}", values.join(" "))?;
            }
        }
        Format::Json => {
            let object: serde_json::Map<String, serde_json::Value> = rows
                .into_iter()
                .map(|(label, values)| (label.to_string(), serde_json::Value::from(values)))
                .collect();
            serde_json::to_writer(&mut *out, &object)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn aggregate(
    snapshot: &StatisticsSnapshot,
    direction: Direction,
) -> Result<Vec<(&'static str, Vec<f64>)>, StatisticsError> {
    Ok(match direction {
        Direction::Sent => vec![("sent", MessageDirection::Sent.aggregate(snapshot)?)],
        Direction::Received => vec![("received", MessageDirection::Received.aggregate(snapshot)?)],
        Direction::Both => {
            let totals = summarize(snapshot)?;
            vec![("sent", totals.sent), ("received", totals.received)]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_dashboard_protocol::StatisticKey;

    fn snapshot() -> StatisticsSnapshot {
        StatisticsSnapshot::new(
            StatisticKey::SENT
                .iter()
                .chain(StatisticKey::RECEIVED.iter())
                .map(|k| (k.as_str().to_string(), vec![1.0, 2.5]))
                .collect(),
        )
    }

    fn render(direction: Direction, format: Format) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &snapshot(), direction, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report_lists_both_directions() {
        assert_eq!(
            render(Direction::Both, Format::Text),
            "sent: 4 10\nreceived: 7 17.5\n"
        );
    }

    #[test]
    fn json_report_for_one_direction() {
        assert_eq!(
            render(Direction::Sent, Format::Json),
            "{\"sent\":[4.0,10.0]}\n"
        );
    }

    #[test]
    fn missing_counter_is_reported() {
        let mut snap = snapshot();
        snap.worker_statistics.remove("messagesSentToOthers");
        let err = write_report(&mut Vec::new(), &snap, Direction::Sent, Format::Text)
            .unwrap_err();
        assert!(err.to_string().contains("messagesSentToOthers"));
    }
}
