//! Local time helpers
//!
//! Answered in-process, without touching the network. All times are UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::types::LocalOp;
use crate::{Error, Result};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Run a local operation on already-normalized inputs
pub fn run(op: LocalOp, inputs: &Map<String, Value>) -> Result<String> {
    let text = match op {
        LocalOp::CurrentTime => current_time(Utc::now()),
        LocalOp::DateToTimestamp => {
            let date = inputs
                .get("date_str")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::InvalidArgument("Missing required argument 'date_str'".into()))?;
            date_to_timestamp(date)?
        }
        LocalOp::TimestampToDate => {
            let timestamp = inputs
                .get("timestamp")
                .and_then(Value::as_i64)
                .ok_or_else(|| Error::InvalidArgument("Missing required argument 'timestamp'".into()))?;
            timestamp_to_date(timestamp)?
        }
    };
    Ok(text)
}

fn current_time(now: DateTime<Utc>) -> String {
    format!(
        "Current time: {}\nUNIX timestamp: {}",
        now.format(ISO_MICROS_FORMAT),
        now.timestamp()
    )
}

/// Parse `YYYY-MM-DD HH:MM:SS`, falling back to `YYYY-MM-DD` (midnight)
pub fn date_to_timestamp(date: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(date, DATE_TIME_FORMAT).or_else(|_| {
        NaiveDate::parse_from_str(date, DATE_FORMAT).map(|d| d.and_time(Default::default()))
    });
    match parsed {
        Ok(naive) => {
            let dt = naive.and_utc();
            Ok(format!(
                "Date: {}\nUNIX timestamp: {}",
                dt.format(ISO_FORMAT),
                dt.timestamp()
            ))
        }
        Err(e) => Err(Error::InvalidArgument(format!(
            "time data '{}' does not match format: {}\nPlease provide date in format YYYY-MM-DD or YYYY-MM-DD HH:MM:SS",
            date, e
        ))),
    }
}

pub fn timestamp_to_date(timestamp: i64) -> Result<String> {
    let dt = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "timestamp {} is out of range\nPlease provide a valid UNIX timestamp",
            timestamp
        ))
    })?;
    Ok(format!(
        "Date: {}\nUNIX timestamp: {}",
        dt.format(ISO_FORMAT),
        timestamp
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timestamp_in(text: &str) -> i64 {
        text.rsplit("UNIX timestamp: ")
            .next()
            .unwrap()
            .trim()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_date_only_is_utc_midnight() {
        assert_eq!(
            date_to_timestamp("2024-01-15").unwrap(),
            "Date: 2024-01-15T00:00:00\nUNIX timestamp: 1705276800"
        );
    }

    #[test]
    fn test_date_with_time() {
        let text = date_to_timestamp("2024-01-15 12:30:00").unwrap();
        assert_eq!(timestamp_in(&text), 1705321800);
    }

    #[test]
    fn test_round_trip() {
        let forward = date_to_timestamp("2023-06-01 08:15:42").unwrap();
        let back = timestamp_to_date(timestamp_in(&forward)).unwrap();
        assert!(back.starts_with("Date: 2023-06-01T08:15:42\n"));
    }

    #[test]
    fn test_bad_date_names_formats() {
        let err = date_to_timestamp("15/01/2024").unwrap_err();
        assert!(err.is_local());
        assert!(err
            .to_string()
            .contains("YYYY-MM-DD or YYYY-MM-DD HH:MM:SS"));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let err = timestamp_to_date(-99999999999999).unwrap_err();
        assert!(err.to_string().contains("valid UNIX timestamp"));
    }

    #[test]
    fn test_epoch() {
        assert_eq!(
            timestamp_to_date(0).unwrap(),
            "Date: 1970-01-01T00:00:00\nUNIX timestamp: 0"
        );
    }

    #[test]
    fn test_current_time_format() {
        let now = DateTime::from_timestamp(1705276800, 123_000_000).unwrap();
        assert_eq!(
            current_time(now),
            "Current time: 2024-01-15T00:00:00.123000\nUNIX timestamp: 1705276800"
        );
    }

    #[test]
    fn test_run_dispatches_on_op() {
        let mut inputs = Map::new();
        inputs.insert("timestamp".into(), json!(1705276800));
        let text = run(LocalOp::TimestampToDate, &inputs).unwrap();
        assert_eq!(text, "Date: 2024-01-15T00:00:00\nUNIX timestamp: 1705276800");

        assert!(run(LocalOp::DateToTimestamp, &Map::new()).is_err());
        assert!(run(LocalOp::CurrentTime, &Map::new())
            .unwrap()
            .starts_with("Current time: "));
    }
}
