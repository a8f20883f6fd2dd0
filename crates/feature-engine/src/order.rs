//! Time Ordering of Datasets
//!
//! Derives a monotonic ordering key from the `HH:MM:SS:mmm` timestamp
//! column. The fallback to positional order is all-or-nothing: if any row
//! fails to parse, the whole dataset keeps its insertion order.

use chrono::{NaiveTime, Timelike};
use sensor_log::Dataset;
use tracing::debug;

/// Source timestamp format: hours, minutes, seconds, milliseconds,
/// colon-separated
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S:%3f";

/// Millisecond-of-day keys when every timestamp parses, otherwise
/// positional indices
fn time_keys(dataset: &Dataset) -> Vec<u64> {
    let parsed: Option<Vec<u64>> = dataset
        .iter()
        .map(|reading| {
            NaiveTime::parse_from_str(&reading.timestamp, TIMESTAMP_FORMAT)
                .ok()
                .map(|t| {
                    t.num_seconds_from_midnight() as u64 * 1_000
                        + (t.nanosecond() / 1_000_000) as u64
                })
        })
        .collect();

    match parsed {
        Some(keys) => keys,
        None => {
            debug!("timestamp column not parseable, ordering by position");
            (0..dataset.len() as u64).collect()
        }
    }
}

/// Indices of the dataset in time order.
///
/// The sort is stable: readings with equal keys keep their original
/// relative order. Never fails; unparseable timestamps degrade to the
/// positional order.
pub fn time_sorted_indices(dataset: &Dataset) -> Vec<usize> {
    let keys = time_keys(dataset);
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_log::{Dataset, Reading};

    fn reading(timestamp: &str, x: i32) -> Reading {
        Reading {
            timestamp: timestamp.to_string(),
            x,
            y: 0,
            z: 0,
            label: "on".to_string(),
        }
    }

    #[test]
    fn test_sorts_by_parsed_time() {
        let dataset = Dataset::new(vec![
            reading("10:00:02:000", 2),
            reading("10:00:00:500", 0),
            reading("10:00:01:000", 1),
        ]);
        assert_eq!(time_sorted_indices(&dataset), vec![1, 2, 0]);
    }

    #[test]
    fn test_millisecond_precision() {
        let dataset = Dataset::new(vec![
            reading("10:00:00:012", 1),
            reading("10:00:00:003", 0),
        ]);
        assert_eq!(time_sorted_indices(&dataset), vec![1, 0]);
    }

    #[test]
    fn test_stable_on_equal_timestamps() {
        let dataset = Dataset::new(vec![
            reading("10:00:00:000", 0),
            reading("10:00:00:000", 1),
            reading("10:00:00:000", 2),
        ]);
        assert_eq!(time_sorted_indices(&dataset), vec![0, 1, 2]);
    }

    #[test]
    fn test_one_bad_timestamp_falls_back_to_position() {
        // later time first, but the garbage row disables time ordering
        let dataset = Dataset::new(vec![
            reading("10:00:09:000", 0),
            reading("garbage", 1),
            reading("10:00:01:000", 2),
        ]);
        assert_eq!(time_sorted_indices(&dataset), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(time_sorted_indices(&dataset).is_empty());
    }
}
