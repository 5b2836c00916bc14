/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry classification of failed responses.
//!
//! Nothing in the client acts on these values; they are surfaced to the caller so that an
//! external retry policy can decide.

use std::time::Duration;

/// Why a failed call may succeed if it is sent again
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// The failure is not tied to the request: a timeout, a dropped connection or a gateway
    /// status (500, 502, 503, 504). Sending a non-idempotent request again may repeat its effect.
    TransientError,

    /// The service asked the caller to slow down
    ThrottlingError,

    /// A modeled server fault that is safe to send again
    ServerError,

    /// A modeled client fault that may clear on its own, eg. a conflicting change still in flight
    ClientError,
}

/// Implemented by service errors so that a retry classifier can inspect them
pub trait ProvideErrorKind {
    /// The kind this error is modeled with, or `None` when only the code or the HTTP status can
    /// tell
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// The error code returned by the service, eg. `ThrottlingException`
    fn code(&self) -> Option<&str>;
}

/// Outcome of classifying a failed response
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RetryKind {
    Error(ErrorKind),

    /// The service named a delay (`x-amz-retry-after`). A retry policy may still ignore it.
    Explicit(Duration),

    NotRetryable,
}

impl RetryKind {
    /// `true` unless this is [`RetryKind::NotRetryable`]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RetryKind::NotRetryable)
    }
}
