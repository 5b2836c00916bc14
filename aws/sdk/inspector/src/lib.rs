/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Inspector client.
//!
//! Every operation is a JSON document posted to the service root and signed with SigV4.
//! Responses are parsed into typed outputs, and failures surface as
//! [`SdkError<Error>`](SdkError). Errors the service flags with `canRetry` are reported through
//! [`Error::is_retryable`]; the client itself never retries.

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
    aws_http::user_agent::ApiMetadata::new("inspector", PKG_VERSION);

/// Crate version, sent in the user agent
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
