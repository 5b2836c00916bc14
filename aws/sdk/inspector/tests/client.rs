/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::test_connection::{capture_request, TestConnection};
use inspector::model::{FindingFilter, Severity};
use inspector::{Client, Config, Credentials, ErrorKind, Region, SdkError};
use smithy_http::body::SdkBody;

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .build()
}

fn one_shot(
    expected: http::Request<SdkBody>,
    status: u16,
    body: &'static str,
) -> TestConnection<&'static str> {
    TestConnection::new(vec![(
        expected,
        http::Response::builder().status(status).body(body).unwrap(),
    )])
}

fn expected(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri("https://inspector.us-west-2.amazonaws.com/")
        .header("x-amz-target", format!("InspectorService.{}", target))
        .header("content-type", "application/x-amz-json-1.1")
        .body(SdkBody::from(body))
        .unwrap()
}

#[tokio::test]
async fn empty_input_is_an_empty_object() {
    let (conn, request) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(
                r#"{"roleArn":"arn:aws:iam::111122223333:role/inspector","valid":true,"registeredAt":1600000000}"#,
            ))
            .unwrap(),
    ));
    let client = Client::from_conf_conn(conf(), conn);
    let output = client
        .describe_cross_account_access_role()
        .send()
        .await
        .expect("valid response");
    assert_eq!(
        output.role_arn.as_deref(),
        Some("arn:aws:iam::111122223333:role/inspector")
    );
    assert_eq!(output.valid, Some(true));

    let request = request.expect_request();
    assert_eq!(request.uri(), "https://inspector.us-west-2.amazonaws.com/");
    assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    let auth = request
        .headers()
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(auth.contains("/us-west-2/inspector/aws4_request"), "{}", auth);
}

#[tokio::test]
async fn only_set_members_are_sent() {
    let conn = one_shot(
        expected(
            "ListFindings",
            r#"{"filter":{"severities":["High"]},"maxResults":10,"assessmentRunArns":["arn:run"]}"#,
        ),
        200,
        r#"{"findingArns":["arn:finding"],"nextToken":"t"}"#,
    );
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .list_findings()
        .assessment_run_arns("arn:run")
        .filter(FindingFilter::builder().severities(Severity::High).build())
        .max_results(10)
        .send()
        .await
        .expect("valid response");
    assert_eq!(output.finding_arns, Some(vec!["arn:finding".to_string()]));
    assert_eq!(output.next_token.as_deref(), Some("t"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn can_retry_is_surfaced() {
    let conn = one_shot(
        expected("StartAssessmentRun", "{}"),
        400,
        r#"{"__type":"AgentsAlreadyRunningAssessmentException","message":"busy","canRetry":true}"#,
    );
    let client = Client::from_conf_conn(conf(), conn.clone());
    match client.start_assessment_run().send().await {
        Err(SdkError::ServiceError { err, .. }) => {
            assert!(matches!(
                err.kind,
                ErrorKind::AgentsAlreadyRunningAssessmentException
            ));
            assert!(err.is_retryable());
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.call_count(), 1);
}

#[tokio::test]
async fn handler_and_callable() {
    let conn = TestConnection::new(vec![
        (
            expected("ListTagsForResource", r#"{"resourceArn":"arn:template"}"#),
            http::Response::builder()
                .status(200)
                .body(r#"{"tags":[{"key":"team","value":"security"}]}"#)
                .unwrap(),
        ),
        (
            expected("DeleteAssessmentTarget", r#"{"assessmentTargetArn":"arn:target"}"#),
            http::Response::builder().status(200).body("{}").unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let tags = client
        .list_tags_for_resource()
        .resource_arn("arn:template")
        .send_callable()
        .await
        .expect("valid response")
        .tags
        .expect("tags are present");
    assert_eq!(tags[0].key.as_deref(), Some("team"));

    let (tx, rx) = tokio::sync::oneshot::channel();
    client
        .delete_assessment_target()
        .assessment_target_arn("arn:target")
        .send_with(
            move |_client: &Client, input, outcome, context: u32| {
                let arn = input.assessment_target_arn.clone();
                let _ = tx.send((arn, outcome.is_ok(), context));
            },
            7,
        );
    assert_eq!(
        rx.await.unwrap(),
        (Some("arn:target".to_string()), true, 7)
    );
    conn.assert_requests_match(&[]);
}
