/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS-specific HTTP behaviors: retry classification, the user agent stage, and parsers for the
//! generic error bodies of the JSON and XML protocols.

pub mod json_errors;
pub mod user_agent;
pub mod xml_errors;

use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
///
/// The outcome is only a classification. Nothing in the client retries.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: &[u16] = &[500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }
}

impl ClassifyResponse for AwsErrorRetryPolicy {
    fn classify<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind + ?Sized,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        RetryKind::NotRetryable
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    /// An error with an optional code and no modeled retry behavior
    struct Coded(Option<&'static str>);

    impl ProvideErrorKind for Coded {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            self.0
        }
    }

    fn response(status: u16) -> http::Response<&'static str> {
        http::Response::builder().status(status).body("").unwrap()
    }

    #[test]
    fn client_errors_are_final() {
        let policy = AwsErrorRetryPolicy::new();
        let cases = [
            (None, 404),
            (Some("ResourceNotFoundException"), 404),
            (Some("InvalidInput"), 400),
        ];
        for (code, status) in cases {
            assert_eq!(
                policy.classify(&Coded(code), &response(status)),
                RetryKind::NotRetryable
            );
        }
    }

    #[test]
    fn gateway_statuses_are_transient() {
        let policy = AwsErrorRetryPolicy::new();
        for status in [500, 502, 503, 504] {
            assert_eq!(
                policy.classify(&Coded(None), &response(status)),
                RetryKind::Error(ErrorKind::TransientError)
            );
        }
        assert_eq!(
            policy.classify(&Coded(None), &response(501)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn codes_outrank_status() {
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            policy.classify(&Coded(Some("ThrottlingException")), &response(400)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(&Coded(Some("PriorRequestNotComplete")), &response(400)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            policy.classify(&Coded(Some("RequestTimeout")), &response(500)),
            RetryKind::Error(ErrorKind::TransientError)
        );
        let generic = smithy_types::Error::builder().code("SlowDown").build();
        assert_eq!(
            policy.classify(&generic, &response(503)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn modeled_kind_is_not_second_guessed() {
        struct Modeled;
        impl ProvideErrorKind for Modeled {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ServerError)
            }

            fn code(&self) -> Option<&str> {
                Some("ThrottlingException")
            }
        }
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(&Modeled, &response(400)),
            RetryKind::Error(ErrorKind::ServerError)
        );
    }

    #[test]
    fn retry_after_header_wins() {
        let response = http::Response::builder()
            .status(503)
            .header("x-amz-retry-after", "1500")
            .body("")
            .unwrap();
        assert_eq!(
            AwsErrorRetryPolicy::new().classify(&Coded(Some("ThrottlingException")), &response),
            RetryKind::Explicit(Duration::from_millis(1500))
        );
    }
}
