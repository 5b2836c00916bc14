/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon S3 Glacier client.
//!
//! Requests are built from typed inputs, checked for required members, signed with SigV4 and
//! sent over HTTPS. Responses are parsed into typed outputs, and failures surface as
//! [`SdkError<Error>`](SdkError). The client never retries; [`Error::is_retryable`] reports
//! whether a retry may succeed.

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};

pub use aws_hyper::SdkError;
pub use aws_types::region::Region;
pub use aws_types::Credentials;
pub use smithy_http::endpoint::Endpoint;

const API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("glacier", PKG_VERSION);

/// Crate version, sent in the user agent
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
