/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.
//!
//! # Example: Signing an HTTP request
//!
//! ```rust
//! # fn test() -> Result<(), aws_sigv4::http_request::SigningError> {
//! use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
//! use std::time::SystemTime;
//!
//! let params = SigningParams {
//!     access_key: "example access key",
//!     secret_key: "example secret key",
//!     security_token: None,
//!     region: "us-east-1",
//!     service_name: "glacier",
//!     time: SystemTime::now(),
//!     settings: SigningSettings::default(),
//! };
//! let mut request = http::Request::get("https://glacier.us-east-1.amazonaws.com/-/vaults")
//!     .body(())
//!     .unwrap();
//! let signable = SignableRequest::from_http(&request, SignableBody::Bytes(&[]));
//! let (instructions, _signature) = sign(signable, &params)?.into_parts();
//! instructions.apply_to_request(&mut request);
//! # Ok(())
//! # }
//! ```

mod canonical_request;
mod error;
mod url_escape;

pub use error::SigningError;

use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use canonical_request::{CanonicalRequest, StringToSign, HMAC_256};
use chrono::{DateTime, Utc};
use http::header::{HeaderValue, AUTHORIZATION};
use http::{HeaderMap, Method, Uri};
use std::time::SystemTime;

/// How the request path is encoded in the canonical request
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum UriEncoding {
    /// Percent-encode the already encoded path again. Every service except S3 expects this.
    Double,
    /// Use the path exactly as it appears on the request.
    Single,
}

/// Whether the payload hash is also sent in the `x-amz-content-sha256` header
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum PayloadChecksumKind {
    /// Add `x-amz-content-sha256` and include it in the signature
    XAmzSha256,
    /// Only use the payload hash in the canonical request
    NoHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SigningSettings {
    pub uri_encoding: UriEncoding,
    pub payload_checksum_kind: PayloadChecksumKind,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            uri_encoding: UriEncoding::Double,
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
        }
    }
}

/// Everything needed to sign a request other than the request itself
#[derive(Debug)]
pub struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub security_token: Option<&'a str>,
    pub region: &'a str,
    pub service_name: &'a str,
    pub time: SystemTime,
    pub settings: SigningSettings,
}

impl<'a> SigningParams<'a> {
    pub(crate) fn time_utc(&self) -> DateTime<Utc> {
        self.time.into()
    }
}

/// The body of the request, as far as the signature is concerned
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SignableBody<'a> {
    /// Sign the bytes of the body
    Bytes(&'a [u8]),
    /// Sign with the literal `UNSIGNED-PAYLOAD`
    UnsignedPayload,
    /// Use an already computed hex encoded SHA-256 hash
    Precomputed(String),
}

/// Borrowed view of an HTTP request to sign
#[derive(Debug)]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap<HeaderValue>,
    body: SignableBody<'a>,
}

impl<'a> SignableRequest<'a> {
    pub fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &'a HeaderMap<HeaderValue>,
        body: SignableBody<'a>,
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn from_http<B>(request: &'a http::Request<B>, body: SignableBody<'a>) -> Self {
        Self::new(request.method(), request.uri(), request.headers(), body)
    }
}

/// A signature along with whatever needs to be applied to the request to carry it
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}

/// Headers to set on the request so that it carries its signature
#[derive(Debug)]
pub struct SigningInstructions {
    headers: HeaderMap<HeaderValue>,
}

impl SigningInstructions {
    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        let target = request.headers_mut();
        for (name, value) in self.headers.iter() {
            target.insert(name.clone(), value.clone());
        }
    }
}

/// Produces a SigV4 signature for `request`, with `Authorization` and `x-amz-*` headers to add.
pub fn sign<'a>(
    request: SignableRequest<'a>,
    params: &'a SigningParams<'a>,
) -> Result<SigningOutput<SigningInstructions>, SigningError> {
    let creq = CanonicalRequest::from(&request, params)?;
    tracing::trace!(canonical_request = %creq);

    let time = params.time_utc();
    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(time, params.region, params.service_name, &encoded_creq);
    tracing::trace!(string_to_sign = %sts);

    let signing_key = generate_signing_key(params.secret_key, time, params.region, params.service_name);
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256,
        params.access_key,
        sts.scope,
        creq.signed_headers(),
        signature
    );
    let mut authorization = HeaderValue::from_str(&authorization)?;
    authorization.set_sensitive(true);

    let mut headers = creq.into_added_headers();
    headers.insert(AUTHORIZATION, authorization);
    Ok(SigningOutput::new(SigningInstructions { headers }, signature))
}
