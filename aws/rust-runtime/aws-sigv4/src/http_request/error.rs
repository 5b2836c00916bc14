/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::InvalidHeaderValue;
use std::error::Error;
use std::fmt;
use std::str::Utf8Error;

/// Error signing request
#[derive(Debug)]
pub struct SigningError {
    kind: SigningErrorKind,
}

#[derive(Debug)]
enum SigningErrorKind {
    /// The request could not be canonicalized
    CanonicalRequest(CanonicalRequestError),
    /// The `Authorization` value is not a legal header value
    Authorization(InvalidHeaderValue),
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SigningErrorKind::CanonicalRequest(err) => {
                write!(f, "failed to create canonical request: {}", err)
            }
            SigningErrorKind::Authorization(_) => {
                write!(f, "computed authorization header was not a valid header value")
            }
        }
    }
}

impl Error for SigningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            SigningErrorKind::CanonicalRequest(err) => Some(err),
            SigningErrorKind::Authorization(err) => Some(err),
        }
    }
}

impl From<CanonicalRequestError> for SigningError {
    fn from(err: CanonicalRequestError) -> Self {
        SigningError {
            kind: SigningErrorKind::CanonicalRequest(err),
        }
    }
}

impl From<InvalidHeaderValue> for SigningError {
    fn from(err: InvalidHeaderValue) -> Self {
        SigningError {
            kind: SigningErrorKind::Authorization(err),
        }
    }
}

/// A header of the request, or one that signing adds, cannot take part in the signature
#[derive(Debug)]
pub(crate) enum CanonicalRequestError {
    /// A signing header (date, token, payload hash or host) is not a legal header value
    AddedHeader(InvalidHeaderValue),
    /// An existing header value is not UTF-8 and cannot be normalized
    NonUtf8Value(Utf8Error),
}

impl CanonicalRequestError {
    pub(crate) fn invalid_utf8_in_header_value(err: Utf8Error) -> Self {
        CanonicalRequestError::NonUtf8Value(err)
    }
}

impl fmt::Display for CanonicalRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalRequestError::AddedHeader(_) => write!(f, "invalid signing header value"),
            CanonicalRequestError::NonUtf8Value(_) => write!(f, "invalid UTF-8 in header value"),
        }
    }
}

impl Error for CanonicalRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CanonicalRequestError::AddedHeader(err) => Some(err),
            CanonicalRequestError::NonUtf8Value(err) => Some(err),
        }
    }
}

impl From<InvalidHeaderValue> for CanonicalRequestError {
    fn from(err: InvalidHeaderValue) -> Self {
        CanonicalRequestError::AddedHeader(err)
    }
}

#[cfg(test)]
mod test {
    use super::SigningError;
    use crate::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
    use std::time::UNIX_EPOCH;

    #[test]
    fn token_with_newline_is_rejected() {
        let params = SigningParams {
            access_key: "AKID",
            secret_key: "secret",
            security_token: Some("bad\ntoken"),
            region: "us-east-1",
            service_name: "glacier",
            time: UNIX_EPOCH,
            settings: SigningSettings::default(),
        };
        let request = http::Request::get("https://glacier.us-east-1.amazonaws.com/-/vaults")
            .body(())
            .unwrap();
        let err: SigningError = sign(
            SignableRequest::from_http(&request, SignableBody::Bytes(&[])),
            &params,
        )
        .expect_err("token is not a header value");
        assert!(err.to_string().starts_with("failed to create canonical request"));
    }
}
