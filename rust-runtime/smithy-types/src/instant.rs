/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time with nanosecond precision, as carried by timestamp members
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Times before the epoch are clamped to the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    /// Format this instant. Instants that chrono cannot represent fall back to epoch seconds.
    pub fn fmt(&self, format: Format) -> String {
        match (format, self.to_chrono()) {
            (Format::DateTime, Some(date_time)) => {
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                if rfc3339.contains('.') {
                    rfc3339 = rfc3339.trim_end_matches('0').to_owned();
                }
                rfc3339.push('Z');
                rfc3339
            }
            _ => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
        assert_eq!(
            Instant::from_epoch_seconds(1576540090).fmt(Format::DateTime),
            "2019-12-16T23:48:10Z"
        );

        let instant = Instant::from_secs_and_nanos_for_test(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1.5);
        assert_eq!(instant.epoch_seconds(), 1);
        assert!(instant.has_nanos());
        assert_eq!(instant.epoch_fractional_seconds(), 1.5);
    }

    impl Instant {
        fn from_secs_and_nanos_for_test(seconds: i64, subsecond_nanos: u32) -> Self {
            Instant {
                seconds,
                subsecond_nanos,
            }
        }
    }
}
