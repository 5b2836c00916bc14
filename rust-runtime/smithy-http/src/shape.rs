/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Table-driven description of an HTTP-bound operation.
//!
//! Each operation is one `const` [`OperationShape`]: its HTTP method, a URI template and the
//! members that must be set before the request may be sent. Inputs describe themselves through
//! [`HttpInput`], and [`OperationShape::request`] turns the pair into an `http::Request`.
//!
//! ```rust
//! use smithy_http::shape::{HttpInput, OperationShape};
//! use std::borrow::Cow;
//!
//! const DELETE_VAULT: OperationShape = OperationShape {
//!     name: "DeleteVault",
//!     method: http::Method::DELETE,
//!     uri: "/{AccountId}/vaults/{VaultName}",
//!     required: &["AccountId", "VaultName"],
//! };
//!
//! struct DeleteVaultInput {
//!     account_id: Option<String>,
//!     vault_name: Option<String>,
//! }
//!
//! impl HttpInput for DeleteVaultInput {
//!     fn label(&self, name: &str) -> Option<Cow<'_, str>> {
//!         match name {
//!             "AccountId" => self.account_id.as_deref().map(Cow::Borrowed),
//!             "VaultName" => self.vault_name.as_deref().map(Cow::Borrowed),
//!             _ => None,
//!         }
//!     }
//!
//!     fn is_set(&self, member: &str) -> bool {
//!         self.label(member).is_some()
//!     }
//! }
//!
//! let input = DeleteVaultInput {
//!     account_id: Some("-".into()),
//!     vault_name: Some("x".into()),
//! };
//! let request = DELETE_VAULT.request(&input).unwrap();
//! assert_eq!(request.uri(), "/-/vaults/x");
//! ```

use crate::body::SdkBody;
use crate::label;
use crate::operation::BuildError;
use crate::query;
use crate::response::ParseStrictResponse;
use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Static description of an operation's HTTP binding
#[derive(Clone, Debug)]
pub struct OperationShape {
    /// Operation name, eg. `DeleteVault`
    pub name: &'static str,
    pub method: http::Method,
    /// Path template. `{Member}` is replaced by the percent-encoded value of that label,
    /// `{Member+}` keeps `/` unescaped. A literal query (`?operation=add`) may follow the path.
    pub uri: &'static str,
    /// Members that must be set, in the order they are checked
    pub required: &'static [&'static str],
}

/// The view of a typed input that [`OperationShape`] needs to build a request
pub trait HttpInput {
    /// The unencoded value of the path label `name`
    fn label(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Whether `member` was ever set, regardless of its value
    fn is_set(&self, member: &str) -> bool;

    /// Write query parameters for every set member bound to the query string
    fn write_query(&self, _query: &mut query::Writer<'_>) {}

    /// Add headers for every set member bound to a header
    fn headers(
        &self,
        builder: http::request::Builder,
    ) -> Result<http::request::Builder, BuildError> {
        Ok(builder)
    }

    /// Serialize the request body
    fn payload(&self) -> Result<SdkBody, BuildError> {
        Ok(SdkBody::empty())
    }
}

/// An input bound to the operation it is sent as
///
/// Implemented by every generated input. `parse_response` receives the full response, error
/// statuses included.
pub trait HttpOperation: HttpInput {
    type Output;
    type Error;

    const SHAPE: OperationShape;

    fn parse_response(response: &http::Response<Bytes>) -> Result<Self::Output, Self::Error>;
}

/// Response handler that defers to [`HttpOperation::parse_response`]
pub struct ResponseParser<O> {
    _operation: PhantomData<fn() -> O>,
}

impl<O> ResponseParser<O> {
    pub fn new() -> Self {
        ResponseParser {
            _operation: PhantomData,
        }
    }
}

impl<O> Default for ResponseParser<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for ResponseParser<O> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O> fmt::Debug for ResponseParser<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseParser").finish()
    }
}

impl<O> ParseStrictResponse for ResponseParser<O>
where
    O: HttpOperation,
{
    type Output = Result<O::Output, O::Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        O::parse_response(response)
    }
}

impl OperationShape {
    /// Check every required member, returning the first one that was never set
    pub fn validate<I>(&self, input: &I) -> Result<(), BuildError>
    where
        I: HttpInput + ?Sized,
    {
        match self.required.iter().find(|member| !input.is_set(member)) {
            Some(field) => Err(BuildError::MissingField { field: *field }),
            None => Ok(()),
        }
    }

    /// Expand the URI template and append the query parameters of `input`
    ///
    /// The result is relative; the endpoint is applied later by middleware.
    pub fn uri<I>(&self, input: &I) -> Result<String, BuildError>
    where
        I: HttpInput + ?Sized,
    {
        let mut out = String::with_capacity(self.uri.len());
        let mut rest: &'static str = self.uri;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let end = match rest[start..].find('}') {
                Some(offset) => start + offset,
                None => {
                    return Err(BuildError::InvalidField {
                        field: self.name,
                        details: format!("unterminated label in `{}`", self.uri),
                    })
                }
            };
            let label = &rest[start + 1..end];
            let (member, greedy) = match label.strip_suffix('+') {
                Some(member) => (member, true),
                None => (label, false),
            };
            let value = input
                .label(member)
                .ok_or(BuildError::MissingField { field: member })?;
            out.push_str(&label::fmt_string(value, greedy));
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        input.write_query(&mut query::Writer::new(&mut out));
        Ok(out)
    }

    /// Validate `input` and build its HTTP request
    pub fn request<I>(&self, input: &I) -> Result<http::Request<SdkBody>, BuildError>
    where
        I: HttpInput + ?Sized,
    {
        self.validate(input)?;
        let builder = http::Request::builder()
            .method(self.method.clone())
            .uri(self.uri(input)?);
        let mut builder = input.headers(builder)?;
        let body = input.payload()?;
        match body.content_length() {
            Some(len) if len > 0 => builder = builder.header(CONTENT_LENGTH, len),
            _ => {}
        }
        Ok(builder.body(body)?)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::BuildError;
    use crate::query;
    use crate::response::ParseStrictResponse;
    use crate::shape::{HttpInput, HttpOperation, OperationShape, ResponseParser};
    use bytes::Bytes;
    use std::borrow::Cow;

    const LIST_JOBS: OperationShape = OperationShape {
        name: "ListJobs",
        method: http::Method::GET,
        uri: "/{AccountId}/vaults/{VaultName}/jobs",
        required: &["AccountId", "VaultName"],
    };

    const ADD_TAGS: OperationShape = OperationShape {
        name: "AddTagsToVault",
        method: http::Method::POST,
        uri: "/{AccountId}/vaults/{VaultName}/tags?operation=add",
        required: &["AccountId", "VaultName"],
    };

    const GET_OBJECT: OperationShape = OperationShape {
        name: "GetObject",
        method: http::Method::GET,
        uri: "/{Bucket}/{Key+}",
        required: &[],
    };

    #[derive(Default)]
    struct TestInput {
        account_id: Option<String>,
        vault_name: Option<String>,
        limit: Option<i32>,
        body: Option<String>,
    }

    impl HttpInput for TestInput {
        fn label(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "AccountId" | "Bucket" => self.account_id.as_deref().map(Cow::Borrowed),
                "VaultName" | "Key" => self.vault_name.as_deref().map(Cow::Borrowed),
                _ => None,
            }
        }

        fn is_set(&self, member: &str) -> bool {
            match member {
                "Limit" => self.limit.is_some(),
                "Body" => self.body.is_some(),
                other => self.label(other).is_some(),
            }
        }

        fn write_query(&self, query: &mut query::Writer<'_>) {
            if let Some(limit) = self.limit {
                query.push_kv("limit", &limit.to_string());
            }
        }

        fn headers(
            &self,
            builder: http::request::Builder,
        ) -> Result<http::request::Builder, BuildError> {
            Ok(builder.header("x-test", "1"))
        }

        fn payload(&self) -> Result<SdkBody, BuildError> {
            Ok(self
                .body
                .clone()
                .map(SdkBody::from)
                .unwrap_or_else(SdkBody::empty))
        }
    }

    #[test]
    fn missing_required_member_is_reported_by_name() {
        let input = TestInput {
            account_id: Some("-".into()),
            ..Default::default()
        };
        match LIST_JOBS.request(&input) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "VaultName"),
            other => panic!("expected a missing field, got {:?}", other),
        }
    }

    #[test]
    fn required_members_are_checked_in_order() {
        let input = TestInput::default();
        match LIST_JOBS.validate(&input) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "AccountId"),
            other => panic!("expected a missing field, got {:?}", other),
        }
    }

    #[test]
    fn unset_query_members_are_omitted() {
        let mut input = TestInput {
            account_id: Some("-".into()),
            vault_name: Some("my vault".into()),
            ..Default::default()
        };
        assert_eq!(LIST_JOBS.uri(&input).unwrap(), "/-/vaults/my%20vault/jobs");
        input.limit = Some(0);
        assert_eq!(
            LIST_JOBS.uri(&input).unwrap(),
            "/-/vaults/my%20vault/jobs?limit=0"
        );
    }

    #[test]
    fn literal_query_is_preserved() {
        let input = TestInput {
            account_id: Some("-".into()),
            vault_name: Some("x".into()),
            limit: Some(5),
            body: Some("{}".into()),
        };
        let request = ADD_TAGS.request(&input).unwrap();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/-/vaults/x/tags?operation=add&limit=5");
        assert_eq!(request.headers().get("x-test").unwrap(), "1");
        assert_eq!(request.headers().get("content-length").unwrap(), "2");
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn greedy_labels_keep_slashes() {
        let input = TestInput {
            account_id: Some("bucket".into()),
            vault_name: Some("a/b c".into()),
            ..Default::default()
        };
        assert_eq!(GET_OBJECT.uri(&input).unwrap(), "/bucket/a/b%20c");
    }

    #[test]
    fn empty_bodies_have_no_content_length() {
        let input = TestInput {
            account_id: Some("-".into()),
            vault_name: Some("x".into()),
            ..Default::default()
        };
        let request = LIST_JOBS.request(&input).unwrap();
        assert!(request.headers().get("content-length").is_none());
        assert_eq!(request.body().bytes(), Some(&b""[..]));
    }

    impl HttpOperation for TestInput {
        type Output = u16;
        type Error = String;

        const SHAPE: OperationShape = LIST_JOBS;

        fn parse_response(response: &http::Response<Bytes>) -> Result<u16, String> {
            match response.status().as_u16() {
                status @ 200..=299 => Ok(status),
                status => Err(format!(
                    "{}{}",
                    String::from_utf8_lossy(response.body()),
                    status
                )),
            }
        }
    }

    #[test]
    fn response_parser_defers_to_the_operation() {
        let parser = ResponseParser::<TestInput>::new();
        let ok = http::Response::builder()
            .status(204)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(parser.parse(&ok), Ok(204));
        let err = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(b"missing "))
            .unwrap();
        assert_eq!(parser.parse(&err), Err("missing 404".to_string()));
        assert_eq!(TestInput::SHAPE.name, "ListJobs");
    }
}
