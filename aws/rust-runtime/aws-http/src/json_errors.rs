/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error parsing for the restJson1 and awsJson1_x protocols.

use bytes::Bytes;
use serde_json::{Map, Value};

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Strip the namespace (`aws.glacier#`) and the trailing URL (`:http://...`) from an error code
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn first_str<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| map.get(*key).and_then(Value::as_str))
}

/// Parse the error code, message and request id of a JSON error response
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the `code` or
/// `__type` body member. An empty body is an error with no code.
pub fn parse_generic_error(
    response: &http::Response<Bytes>,
) -> Result<smithy_types::Error, serde_json::Error> {
    let body = response.body();
    let map: Map<String, Value> = if body.iter().all(u8::is_ascii_whitespace) {
        Map::new()
    } else {
        serde_json::from_slice(body)?
    };

    let mut err = smithy_types::Error::builder();
    let header_code = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    if let Some(code) = header_code.or_else(|| first_str(&map, &["code", "__type"])) {
        err.code(sanitize_error_code(code));
    }
    if let Some(message) = first_str(&map, &["message", "Message", "errorMessage"]) {
        err.message(message);
    }
    if let Some(request_id) = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        err.request_id(request_id);
    }
    let err = err.build();
    if err.code().is_none() {
        tracing::debug!(status = %response.status(), "error response carried no code");
    }
    Ok(err)
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn error_type_header_wins() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/")
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{"code":"Other","message":"Vault not found","type":"Client"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).expect("valid error");
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("Vault not found"));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn code_from_body() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(
                br#"{"__type":"com.amazonaws.inspector#InvalidInputException","Message":"bad arn","canRetry":false}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).expect("valid error");
        assert_eq!(err.code(), Some("InvalidInputException"));
        assert_eq!(err.message(), Some("bad arn"));
    }

    #[test]
    fn empty_body() {
        let response = http::Response::builder()
            .status(503)
            .body(Bytes::new())
            .unwrap();
        let err = parse_generic_error(&response).expect("empty bodies are allowed");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn invalid_body() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>"))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_error_code("aws.protocoltests#FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(
            sanitize_error_code("aws.protocoltests#FooError:http://internal.amazon.com/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
