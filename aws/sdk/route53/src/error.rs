/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Route 53.

use aws_http::AwsErrorRetryPolicy;
use bytes::Bytes;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind as RetryErrorKind, ProvideErrorKind, RetryKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// The hosted zone is public where a private one is required
    HostedZoneNotPrivate,
    InvalidInput,
    NoSuchHealthCheck,
    NoSuchHostedZone,
    /// A change to the same resource is still being applied
    PriorRequestNotComplete,
    ThrottlingException,
    Unhandled(BoxError),
}

impl ErrorKind {
    pub fn from_code(code: &str) -> Option<ErrorKind> {
        Some(match code {
            "HostedZoneNotPrivate" => ErrorKind::HostedZoneNotPrivate,
            "InvalidInput" => ErrorKind::InvalidInput,
            "NoSuchHealthCheck" => ErrorKind::NoSuchHealthCheck,
            "NoSuchHostedZone" => ErrorKind::NoSuchHostedZone,
            "PriorRequestNotComplete" => ErrorKind::PriorRequestNotComplete,
            "ThrottlingException" => ErrorKind::ThrottlingException,
            _ => return None,
        })
    }

    fn name(&self) -> &'static str {
        match self {
            ErrorKind::HostedZoneNotPrivate => "HostedZoneNotPrivate",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::NoSuchHealthCheck => "NoSuchHealthCheck",
            ErrorKind::NoSuchHostedZone => "NoSuchHostedZone",
            ErrorKind::PriorRequestNotComplete => "PriorRequestNotComplete",
            ErrorKind::ThrottlingException => "ThrottlingException",
            ErrorKind::Unhandled(_) => "Unhandled",
        }
    }
}

/// Error returned by a Route 53 operation
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

    /// Translate an `<ErrorResponse>` document
    pub(crate) fn from_response(response: &http::Response<Bytes>) -> Self {
        let mut err = match aws_http::xml_errors::parse_generic_error(response.body()) {
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

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryErrorKind> {
        match self.kind {
            ErrorKind::ThrottlingException => Some(RetryErrorKind::ThrottlingError),
            ErrorKind::PriorRequestNotComplete => Some(RetryErrorKind::TransientError),
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

#[cfg(test)]
mod test {
    use crate::error::{Error, ErrorKind};
    use bytes::Bytes;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn error_response_document() {
        let err = Error::from_response(&response(
            404,
            r#"<?xml version="1.0"?>
            <ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                <Error>
                    <Type>Sender</Type>
                    <Code>NoSuchHostedZone</Code>
                    <Message>No hosted zone found with ID: Z1</Message>
                </Error>
                <RequestId>req-1</RequestId>
            </ErrorResponse>"#,
        ));
        assert!(matches!(err.kind, ErrorKind::NoSuchHostedZone));
        assert_eq!(err.message(), Some("No hosted zone found with ID: Z1"));
        assert_eq!(err.request_id(), Some("req-1"));
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "NoSuchHostedZone: No hosted zone found with ID: Z1"
        );
    }

    #[test]
    fn prior_request_is_transient() {
        let err = Error::from_response(&response(
            400,
            "<ErrorResponse><Error><Code>PriorRequestNotComplete</Code></Error></ErrorResponse>",
        ));
        assert!(matches!(err.kind, ErrorKind::PriorRequestNotComplete));
        assert!(err.is_retryable());
    }

    #[test]
    fn unparseable_body_is_unhandled() {
        let err = Error::from_response(&response(502, "<html>Bad Gateway"));
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert!(err.is_retryable());
    }
}
