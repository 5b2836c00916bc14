/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP specific retry behaviors
//!
//! For protocol agnostic retries, see `smithy_types::retry`.

use smithy_types::retry::{ProvideErrorKind, RetryKind};

/// Classify an error response as retryable or not
///
/// The client never acts on the classification itself; it is recorded on the error so that the
/// caller, or an external retry policy, can.
pub trait ClassifyResponse {
    fn classify<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind + ?Sized;
}
