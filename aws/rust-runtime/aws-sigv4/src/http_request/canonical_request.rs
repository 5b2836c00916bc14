/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::error::CanonicalRequestError;
use super::url_escape::{percent_encode_path, percent_encode_query};
use super::{PayloadChecksumKind, SignableBody, SignableRequest, SigningParams, UriEncoding};
use crate::date_fmt::{format_date, format_date_time};
use crate::sign::sha256_hex_string;
use chrono::{DateTime, Utc};
use http::header::{HeaderValue, HOST};
use http::{HeaderMap, Method, Uri};
use std::borrow::Cow;
use std::fmt;

pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";

const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Headers that are never part of the signature. Proxies and clients are free to rewrite them.
const EXCLUDED_HEADERS: &[&str] = &["authorization", "expect", "user-agent", "x-amzn-trace-id"];

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SignedHeaders {
    names: Vec<String>,
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(";"))
    }
}

#[derive(Debug)]
pub(crate) struct CanonicalRequest<'a> {
    method: &'a Method,
    path: String,
    params: Option<String>,
    headers: Vec<(String, String)>,
    signed_headers: SignedHeaders,
    payload_hash: String,
    /// Headers the signer must add to the outgoing request
    added_headers: HeaderMap,
}

impl<'a> CanonicalRequest<'a> {
    /// Construct a CanonicalRequest from a [`SignableRequest`] and [`SigningParams`].
    ///
    /// The returned canonical request includes the headers that signing adds
    /// (`x-amz-date`, and when configured `x-amz-security-token` and `x-amz-content-sha256`).
    /// A `host` header is derived from the URI authority when the request lacks one.
    pub(crate) fn from(
        req: &SignableRequest<'a>,
        params: &SigningParams<'_>,
    ) -> Result<CanonicalRequest<'a>, CanonicalRequestError> {
        let date_time = format_date_time(&params.time_utc());
        let payload_hash = match &req.body {
            SignableBody::Bytes(data) => sha256_hex_string(data),
            SignableBody::UnsignedPayload => UNSIGNED_PAYLOAD.to_string(),
            SignableBody::Precomputed(hash) => hash.clone(),
        };

        let path = match req.uri.path() {
            "" => "/",
            path => path,
        };
        let path = match params.settings.uri_encoding {
            UriEncoding::Double => percent_encode_path(path),
            UriEncoding::Single => path.to_string(),
        };

        let mut added_headers = HeaderMap::new();
        added_headers.insert(X_AMZ_DATE, HeaderValue::from_str(&date_time)?);
        if let Some(token) = params.security_token {
            let mut token = HeaderValue::from_str(token)?;
            token.set_sensitive(true);
            added_headers.insert(X_AMZ_SECURITY_TOKEN, token);
        }
        if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            added_headers.insert(X_AMZ_CONTENT_SHA_256, HeaderValue::from_str(&payload_hash)?);
        }

        let mut all_headers = req.headers.clone();
        if !all_headers.contains_key(HOST) {
            if let Some(authority) = req.uri.authority() {
                all_headers.insert(HOST, HeaderValue::from_str(authority.as_str())?);
            }
        }
        for (name, value) in added_headers.iter() {
            all_headers.insert(name.clone(), value.clone());
        }

        let mut names: Vec<_> = all_headers
            .keys()
            .filter(|name| !EXCLUDED_HEADERS.contains(&name.as_str()))
            .collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let mut headers = Vec::with_capacity(names.len());
        for name in &names {
            let values = all_headers
                .get_all(*name)
                .iter()
                .map(|value| {
                    std::str::from_utf8(value.as_bytes())
                        .map(normalize_header_value)
                        .map_err(CanonicalRequestError::invalid_utf8_in_header_value)
                })
                .collect::<Result<Vec<_>, _>>()?;
            headers.push((name.as_str().to_string(), values.join(",")));
        }
        let signed_headers = SignedHeaders {
            names: names.iter().map(|name| name.as_str().to_string()).collect(),
        };

        Ok(CanonicalRequest {
            method: req.method,
            path,
            params: Self::params(req.uri),
            headers,
            signed_headers,
            payload_hash,
            added_headers,
        })
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<'_, str>, Cow<'_, str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        if params.is_empty() {
            return None;
        }
        params.sort();
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", percent_encode_query(key), percent_encode_query(value))
            })
            .collect();
        Some(encoded.join("&"))
    }

    pub(crate) fn signed_headers(&self) -> &SignedHeaders {
        &self.signed_headers
    }

    pub(crate) fn into_added_headers(self) -> HeaderMap {
        self.added_headers
    }
}

fn normalize_header_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Scope<'a> {
    date: String,
    region: &'a str,
    service: &'a str,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(time: DateTime<Utc>, region: &'a str, service: &'a str) -> Self {
        Scope {
            date: format_date(&time),
            region,
            service,
        }
    }
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            self.date, self.region, self.service
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    date_time: String,
    hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        time: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        StringToSign {
            scope: Scope::new(time, region, service),
            date_time: format_date_time(&time),
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256, self.date_time, self.scope, self.hashed_creq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CanonicalRequest, StringToSign};
    use crate::http_request::{
        PayloadChecksumKind, SignableBody, SignableRequest, SigningParams, SigningSettings,
        UriEncoding,
    };
    use crate::sign::sha256_hex_string;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, UNIX_EPOCH};

    fn params(settings: SigningSettings) -> SigningParams<'static> {
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            security_token: None,
            region: "us-east-1",
            service_name: "service",
            time: UNIX_EPOCH + Duration::from_secs(1_440_938_160),
            settings,
        }
    }

    #[test]
    fn vanilla_canonical_request() {
        let req = http::Request::get("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(&[]));
        let params = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert_eq!(
            creq.to_string(),
            "GET\n/\n\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\n\
             e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let hashed = sha256_hex_string(creq.to_string().as_bytes());
        let sts = StringToSign::new(params.time_utc(), "us-east-1", "service", &hashed);
        assert_eq!(
            sts.to_string(),
            format!(
                "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\n{}",
                hashed
            )
        );
    }

    #[test]
    fn query_params_are_sorted_and_encoded() {
        let req = http::Request::get("https://example.amazonaws.com/?Param2=value2&Param1=value%201")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(&[]));
        let params = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert_eq!(creq.params.as_deref(), Some("Param1=value%201&Param2=value2"));
    }

    #[test]
    fn excluded_headers_are_not_signed() {
        let req = http::Request::get("https://example.amazonaws.com/")
            .header("user-agent", "test-agent")
            .header("x-amzn-trace-id", "trace")
            .header("X-Amz-Glacier-Version", "2012-06-01")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(&[]));
        let params = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert_eq!(
            creq.signed_headers().to_string(),
            "host;x-amz-date;x-amz-glacier-version"
        );
    }

    #[test]
    fn header_values_are_trimmed_and_collapsed() {
        let req = http::Request::get("https://example.amazonaws.com/")
            .header("my-header", "  value   with   spaces ")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(&[]));
        let params = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert!(creq.to_string().contains("my-header:value with spaces\n"));
    }

    #[test]
    fn double_and_single_path_encoding() {
        let req = http::Request::delete("https://glacier.us-east-1.amazonaws.com/-/vaults/my%20vault")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(&[]));

        let double = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &double).unwrap();
        assert_eq!(creq.path, "/-/vaults/my%2520vault");

        let single = params(SigningSettings {
            uri_encoding: UriEncoding::Single,
            ..Default::default()
        });
        let creq = CanonicalRequest::from(&signable, &single).unwrap();
        assert_eq!(creq.path, "/-/vaults/my%20vault");
    }

    #[test]
    fn content_sha256_header_is_added_and_signed() {
        let req = http::Request::put("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::Bytes(b"{}"));
        let params = params(SigningSettings {
            payload_checksum_kind: PayloadChecksumKind::XAmzSha256,
            ..Default::default()
        });
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert_eq!(
            creq.signed_headers().to_string(),
            "host;x-amz-content-sha256;x-amz-date"
        );
        let added = creq.into_added_headers();
        assert_eq!(
            added.get("x-amz-content-sha256").unwrap(),
            sha256_hex_string(b"{}").as_str()
        );
    }

    #[test]
    fn unsigned_payload() {
        let req = http::Request::get("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let signable = SignableRequest::from_http(&req, SignableBody::UnsignedPayload);
        let params = params(SigningSettings::default());
        let creq = CanonicalRequest::from(&signable, &params).unwrap();
        assert!(creq.to_string().ends_with("\nUNSIGNED-PAYLOAD"));
    }
}
