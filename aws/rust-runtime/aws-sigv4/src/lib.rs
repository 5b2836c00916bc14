/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides functions for calculating Sigv4 signing keys, signatures, and
//! utilities for signing HTTP requests.

#![warn(missing_debug_implementations, rust_2018_idioms)]

mod date_fmt;
pub mod http_request;
pub mod sign;
