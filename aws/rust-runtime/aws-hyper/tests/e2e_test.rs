/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::partition::endpoint::Metadata;
use aws_endpoint::set_endpoint_resolver;
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::{capture_request, TestConnection};
use aws_hyper::SdkError;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::{Credentials, SigningService};
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Response;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, Operation};
use smithy_http::response::ParseStrictResponse;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, String>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).into())
        } else {
            Err(format!("status {}", response.status()))
        }
    }
}

fn test_operation() -> Operation<TestOperationParser> {
    let mut req = operation::Request::new(
        http::Request::builder()
            .method("DELETE")
            .uri("/-/vaults/x")
            .body(SdkBody::empty())
            .unwrap(),
    );
    {
        let mut props = req.properties_mut();
        set_endpoint_resolver(
            &mut props,
            Arc::new(Metadata::regional("test-service.{region}.amazonaws.com")),
        );
        props.insert(Credentials::from_keys("access_key", "secret_key", None));
        props.insert(Region::new("us-east-1"));
        props.insert(SigningService::from_static("test-service"));
        props.insert(OperationSigningConfig::default_config());
        props.insert(AwsUserAgent::for_tests());
        props.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
    }
    Operation::new(req, TestOperationParser)
}

#[tokio::test]
async fn request_is_resolved_tagged_and_signed() {
    let (conn, request) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from("Hello!"))
            .unwrap(),
    ));
    let client = aws_hyper::new(conn);
    let resp = client.call(test_operation()).await;
    assert_eq!(resp.expect("successful operation"), "Hello!");

    let req = request.expect_request();
    assert_eq!(req.method(), "DELETE");
    assert_eq!(
        req.uri(),
        "https://test-service.us-east-1.amazonaws.com/-/vaults/x"
    );
    assert_eq!(req.headers().get("x-amz-date").unwrap(), "20210215T184017Z");
    assert_eq!(
        req.headers().get(USER_AGENT).unwrap(),
        AwsUserAgent::for_tests().ua_header().as_str()
    );
    assert!(req.headers().get("x-amz-user-agent").is_some());
    let auth = req.headers().get(AUTHORIZATION).unwrap().to_str().unwrap();
    assert!(
        auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=access_key/20210215/us-east-1/test-service/aws4_request, \
             SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature="
        ),
        "{}",
        auth
    );
    let signature = auth.rsplit('=').next().unwrap();
    assert_eq!(signature.len(), 64);
}

#[tokio::test]
async fn service_errors_carry_the_raw_response() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(404)
            .body("not here")
            .unwrap(),
    )]);
    let client = aws_hyper::new(conn.clone());
    match client.call(test_operation()).await {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(err, "status 404 Not Found");
            assert_eq!(raw.status(), 404);
            assert_eq!(raw.body().bytes(), Some(&b"not here"[..]));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.call_count(), 1);
}

#[tokio::test]
async fn construction_failures_never_reach_the_connection() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = aws_hyper::new(conn.clone());
    let mut op = test_operation();
    op.properties_mut().remove::<Region>();
    match client.call(op).await {
        Err(SdkError::ConstructionFailure(_)) => {}
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert_eq!(conn.call_count(), 0);
}
