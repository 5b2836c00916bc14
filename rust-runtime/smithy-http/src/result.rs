/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The outcome of dispatching an operation

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Body of the raw HTTP response that accompanies every parsed outcome
///
/// Only kept for introspection (eg. logging an unexpected error response).
#[derive(Debug)]
pub struct ResponseBody(Inner);

#[derive(Debug)]
enum Inner {
    Bytes(Bytes),
    Streaming,
    Err,
}

impl ResponseBody {
    pub fn from_bytes(bytes: Bytes) -> Self {
        ResponseBody(Inner::Bytes(bytes))
    }

    /// The body was handed to the parser without being loaded
    pub fn streaming() -> Self {
        ResponseBody(Inner::Streaming)
    }

    /// The body failed to load
    pub fn error() -> Self {
        ResponseBody(Inner::Err)
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Bytes(bytes) => Some(bytes.as_ref()),
            _ => None,
        }
    }
}

impl From<&'static str> for ResponseBody {
    fn from(s: &'static str) -> Self {
        ResponseBody(Inner::Bytes(Bytes::from_static(s.as_bytes())))
    }
}

#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<ResponseBody>,
    pub parsed: O,
}

/// Failed outcome of an operation
///
/// Exactly one of these is produced per failed call; nothing at this layer retries.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ///
    /// Missing required members surface here as a [`BuildError`](crate::operation::BuildError).
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<ResponseBody>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        raw: http::Response<ResponseBody>,
        err: E,
    },
}

impl<E> SdkError<E> {
    /// The modeled service error, if the service returned one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// The raw response, if one was received
    pub fn raw_response(&self) -> Option<&http::Response<ResponseBody>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response error: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::operation::BuildError;
    use crate::result::SdkError;
    use std::error::Error;

    #[derive(Debug)]
    struct ModeledError;

    impl std::fmt::Display for ModeledError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "ModeledError")
        }
    }

    impl Error for ModeledError {}

    #[test]
    fn construction_failure_exposes_build_error() {
        let err: SdkError<ModeledError> =
            SdkError::ConstructionFailure(BuildError::MissingField { field: "VaultName" }.into());
        assert_eq!(
            err.to_string(),
            "failed to construct request: Missing required field [VaultName]"
        );
        let source = err.source().expect("has a source");
        assert!(source.downcast_ref::<BuildError>().is_some());
        assert!(err.service_error().is_none());
        assert!(err.raw_response().is_none());
    }

    #[test]
    fn service_error_keeps_raw_response() {
        let err = SdkError::ServiceError {
            raw: http::Response::builder()
                .status(404)
                .body("{}".into())
                .unwrap(),
            err: ModeledError,
        };
        assert_eq!(err.raw_response().unwrap().status(), 404);
        assert_eq!(err.raw_response().unwrap().body().bytes(), Some(&b"{}"[..]));
        assert_eq!(err.to_string(), "service error: ModeledError");
    }
}
