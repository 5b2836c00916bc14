/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Amazon Inspector.

use aws_http::AwsErrorRetryPolicy;
use bytes::Bytes;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind, RetryKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    AccessDeniedException,
    AgentsAlreadyRunningAssessmentException,
    AssessmentRunInProgressException,
    /// Internal failure of the service
    InternalException,
    InvalidCrossAccountRoleException,
    InvalidInputException,
    LimitExceededException,
    /// The referenced entity does not exist
    NoSuchEntityException,
    PreviewGenerationInProgressException,
    ServiceTemporarilyUnavailableException,
    UnsupportedFeatureException,
    /// An unexpected error, eg. an unknown error code or a malformed response
    Unhandled(BoxError),
}

impl ErrorKind {
    pub fn from_code(code: &str) -> Option<ErrorKind> {
        Some(match code {
            "AccessDeniedException" => ErrorKind::AccessDeniedException,
            "AgentsAlreadyRunningAssessmentException" => {
                ErrorKind::AgentsAlreadyRunningAssessmentException
            }
            "AssessmentRunInProgressException" => ErrorKind::AssessmentRunInProgressException,
            "InternalException" => ErrorKind::InternalException,
            "InvalidCrossAccountRoleException" => ErrorKind::InvalidCrossAccountRoleException,
            "InvalidInputException" => ErrorKind::InvalidInputException,
            "LimitExceededException" => ErrorKind::LimitExceededException,
            "NoSuchEntityException" => ErrorKind::NoSuchEntityException,
            "PreviewGenerationInProgressException" => {
                ErrorKind::PreviewGenerationInProgressException
            }
            "ServiceTemporarilyUnavailableException" => {
                ErrorKind::ServiceTemporarilyUnavailableException
            }
            "UnsupportedFeatureException" => ErrorKind::UnsupportedFeatureException,
            _ => return None,
        })
    }

    fn name(&self) -> &'static str {
        match self {
            ErrorKind::AccessDeniedException => "AccessDeniedException",
            ErrorKind::AgentsAlreadyRunningAssessmentException => {
                "AgentsAlreadyRunningAssessmentException"
            }
            ErrorKind::AssessmentRunInProgressException => "AssessmentRunInProgressException",
            ErrorKind::InternalException => "InternalException",
            ErrorKind::InvalidCrossAccountRoleException => "InvalidCrossAccountRoleException",
            ErrorKind::InvalidInputException => "InvalidInputException",
            ErrorKind::LimitExceededException => "LimitExceededException",
            ErrorKind::NoSuchEntityException => "NoSuchEntityException",
            ErrorKind::PreviewGenerationInProgressException => {
                "PreviewGenerationInProgressException"
            }
            ErrorKind::ServiceTemporarilyUnavailableException => {
                "ServiceTemporarilyUnavailableException"
            }
            ErrorKind::UnsupportedFeatureException => "UnsupportedFeatureException",
            ErrorKind::Unhandled(_) => "Unhandled",
        }
    }
}

/// Error returned by an Amazon Inspector operation
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

    pub fn generic(meta: smithy_types::Error) -> Self {
        match meta.code().and_then(ErrorKind::from_code) {
            Some(kind) => Error::new(kind, meta),
            None => Error::new(ErrorKind::Unhandled(meta.clone().into()), meta),
        }
    }

    /// Translate an error response
    ///
    /// Inspector marks some errors with `"canRetry": true`; those are retryable regardless of
    /// their status or code.
    pub(crate) fn from_response(response: &http::Response<Bytes>) -> Self {
        let mut err = match aws_http::json_errors::parse_generic_error(response) {
            Ok(meta) => Error::generic(meta),
            Err(parse_error) => Error::unhandled(parse_error),
        };
        let can_retry = serde_json::from_slice::<serde_json::Value>(response.body())
            .ok()
            .and_then(|body| body.get("canRetry").and_then(serde_json::Value::as_bool))
            .unwrap_or(false);
        err.retryable = can_retry
            || !matches!(
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
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self.kind {
            ErrorKind::InternalException | ErrorKind::ServiceTemporarilyUnavailableException => {
                Some(RetryErrorKind::ServerError)
            }
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
