/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Glacier.
//!
//! Every operation fails with the same [`Error`]. The error code sent by the service is mapped to
//! an [`ErrorKind`]; codes this client does not know about become [`ErrorKind::Unhandled`]. The
//! code and message are always available verbatim through [`Error::code`] and
//! [`Error::message`].

use aws_http::AwsErrorRetryPolicy;
use bytes::Bytes;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind, RetryKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What went wrong, as reported by Glacier
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// There is not enough capacity to process this job
    InsufficientCapacityException,
    /// A parameter of the request is incorrectly specified
    InvalidParameterValueException,
    /// The request would exceed a limit of the account
    LimitExceededException,
    /// A required header or parameter is missing from the request
    MissingParameterValueException,
    /// The job is not allowed by the data retrieval policy
    PolicyEnforcedException,
    /// The upload did not complete in time
    RequestTimeoutException,
    /// The vault, job or other resource does not exist
    ResourceNotFoundException,
    /// The service cannot complete the request
    ServiceUnavailableException,
    /// An unexpected error, eg. an unknown error code or a malformed response
    Unhandled(BoxError),
}

impl ErrorKind {
    /// Look up the kind modeled for a service error code
    pub fn from_code(code: &str) -> Option<ErrorKind> {
        Some(match code {
            "InsufficientCapacityException" => ErrorKind::InsufficientCapacityException,
            "InvalidParameterValueException" => ErrorKind::InvalidParameterValueException,
            "LimitExceededException" => ErrorKind::LimitExceededException,
            "MissingParameterValueException" => ErrorKind::MissingParameterValueException,
            "PolicyEnforcedException" => ErrorKind::PolicyEnforcedException,
            "RequestTimeoutException" => ErrorKind::RequestTimeoutException,
            "ResourceNotFoundException" => ErrorKind::ResourceNotFoundException,
            "ServiceUnavailableException" => ErrorKind::ServiceUnavailableException,
            _ => return None,
        })
    }

    fn name(&self) -> &'static str {
        match self {
            ErrorKind::InsufficientCapacityException => "InsufficientCapacityException",
            ErrorKind::InvalidParameterValueException => "InvalidParameterValueException",
            ErrorKind::LimitExceededException => "LimitExceededException",
            ErrorKind::MissingParameterValueException => "MissingParameterValueException",
            ErrorKind::PolicyEnforcedException => "PolicyEnforcedException",
            ErrorKind::RequestTimeoutException => "RequestTimeoutException",
            ErrorKind::ResourceNotFoundException => "ResourceNotFoundException",
            ErrorKind::ServiceUnavailableException => "ServiceUnavailableException",
            ErrorKind::Unhandled(_) => "Unhandled",
        }
    }
}

/// Error returned by a Glacier operation
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
    pub(crate) retryable: bool,
}

impl Error {
    pub fn new(kind: ErrorKind, meta: smithy_types::Error) -> Self {
        Error {
            kind,
            meta,
            retryable: false,
        }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Error::new(ErrorKind::Unhandled(err.into()), Default::default())
    }

    /// Map generic error metadata to a modeled error, falling back to `Unhandled`
    pub fn generic(meta: smithy_types::Error) -> Self {
        match meta.code().and_then(ErrorKind::from_code) {
            Some(kind) => Error::new(kind, meta),
            None => Error::new(ErrorKind::Unhandled(meta.clone().into()), meta),
        }
    }

    /// Translate an error response
    pub(crate) fn from_response(response: &http::Response<Bytes>) -> Self {
        let mut err = match aws_http::json_errors::parse_generic_error(response) {
            Ok(meta) => Error::generic(meta),
            Err(parse_error) => Error::unhandled(parse_error),
        };
        err.retryable = !matches!(
            AwsErrorRetryPolicy::new().classify(&err, response),
            RetryKind::NotRetryable
        );
        err
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// Whether sending the same request again may succeed
    ///
    /// Informational only: the client never retries.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self.kind {
            ErrorKind::ServiceUnavailableException => Some(RetryErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Unhandled(inner) => write!(f, "{}", inner),
            kind => {
                write!(f, "{}", kind.name())?;
                if let Some(message) = self.message() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Unhandled(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}
