/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats a chrono `DateTime<Utc>` in `YYYYMMDD` format.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a chrono `DateTime<Utc>` in `YYYYMMDD'T'HHMMSS'Z'` format.
pub(crate) fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_date_time};
    use chrono::{DateTime, Utc};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn date_formats() {
        let time: DateTime<Utc> = (UNIX_EPOCH + Duration::from_secs(1_440_938_160)).into();
        assert_eq!(format_date(&time), "20150830");
        assert_eq!(format_date_time(&time), "20150830T123600Z");
    }
}
