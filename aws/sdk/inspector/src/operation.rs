/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP bindings of every Amazon Inspector operation.
//!
//! Inspector uses `awsJson1_1`: every operation is a `POST /` whose target is named by the
//! `x-amz-target` header.

use crate::config::Config;
use crate::error::Error;
use crate::input::*;
use crate::output::*;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use smithy_http::operation::{self, BuildError, Metadata, Operation};
use smithy_http::shape::{HttpOperation, OperationShape, ResponseParser};

const SERVICE: &str = "inspector";
const TARGET_PREFIX: &str = "InspectorService";

/// Build the operation that sends `input`
pub fn make_operation<I>(
    input: &I,
    conf: &Config,
) -> Result<Operation<ResponseParser<I>>, BuildError>
where
    I: HttpOperation<Error = Error>,
{
    let mut request = I::SHAPE.request(input)?;
    let target = format!("{}.{}", TARGET_PREFIX, I::SHAPE.name);
    let headers = request.headers_mut();
    headers.insert(
        "x-amz-target",
        HeaderValue::from_str(&target).map_err(|err| BuildError::InvalidField {
            field: "x-amz-target",
            details: err.to_string(),
        })?,
    );
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-amz-json-1.1"),
    );
    let mut request = operation::Request::new(request);
    {
        let mut props = request.properties_mut();
        conf.apply(&mut props);
        props.insert(SigningService::from_static(SERVICE));
        props.insert(OperationSigningConfig::default_config());
    }
    Ok(Operation::new(request, ResponseParser::new())
        .with_metadata(Metadata::new(I::SHAPE.name, SERVICE)))
}

fn parse_json<T>(response: &http::Response<Bytes>) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if !response.status().is_success() {
        return Err(Error::from_response(response));
    }
    let body = response.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(Error::unhandled)
}

macro_rules! json_operation {
    ($($input:ty => $output:ty, $name:literal;)*) => {
        $(
            impl HttpOperation for $input {
                type Output = $output;
                type Error = Error;

                const SHAPE: OperationShape = OperationShape {
                    name: $name,
                    method: Method::POST,
                    uri: "/",
                    required: &[],
                };

                fn parse_response(response: &http::Response<Bytes>) -> Result<$output, Error> {
                    parse_json(response)
                }
            }
        )*
    };
}

json_operation! {
    AddAttributesToFindingsInput => AddAttributesToFindingsOutput, "AddAttributesToFindings";
    CreateAssessmentTargetInput => CreateAssessmentTargetOutput, "CreateAssessmentTarget";
    DeleteAssessmentTargetInput => DeleteAssessmentTargetOutput, "DeleteAssessmentTarget";
    DescribeAssessmentTemplatesInput => DescribeAssessmentTemplatesOutput,
        "DescribeAssessmentTemplates";
    DescribeCrossAccountAccessRoleInput => DescribeCrossAccountAccessRoleOutput,
        "DescribeCrossAccountAccessRole";
    ListAssessmentTargetsInput => ListAssessmentTargetsOutput, "ListAssessmentTargets";
    ListAssessmentTemplatesInput => ListAssessmentTemplatesOutput, "ListAssessmentTemplates";
    ListFindingsInput => ListFindingsOutput, "ListFindings";
    ListTagsForResourceInput => ListTagsForResourceOutput, "ListTagsForResource";
    StartAssessmentRunInput => StartAssessmentRunOutput, "StartAssessmentRun";
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::error::ErrorKind;
    use crate::input::{
        DescribeAssessmentTemplatesInput, DescribeCrossAccountAccessRoleInput,
        ListTagsForResourceInput,
    };
    use crate::model::FailedItemErrorCode;
    use crate::operation::make_operation;
    use aws_types::region::Region;
    use bytes::Bytes;
    use smithy_http::shape::HttpOperation;
    use smithy_types::Instant;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn every_request_is_a_targeted_post() {
        let conf = Config::builder().region(Region::new("us-west-2")).build();
        let input = DescribeCrossAccountAccessRoleInput::builder().build();
        let (request, _) = make_operation(&input, &conf)
            .expect("nothing is required")
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
        assert_eq!(
            request.headers().get("x-amz-target").unwrap(),
            "InspectorService.DescribeCrossAccountAccessRole"
        );
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn timestamps_are_parsed() {
        let output = DescribeCrossAccountAccessRoleInput::parse_response(&response(
            200,
            r#"{"roleArn":"arn:aws:iam::111122223333:role/inspector","valid":true,"registeredAt":1.6E9}"#,
        ))
        .expect("valid body");
        assert_eq!(output.valid, Some(true));
        assert_eq!(
            output.registered_at,
            Some(Instant::from_epoch_seconds(1_600_000_000))
        );
    }

    #[test]
    fn failed_items_are_keyed_by_arn() {
        let output = DescribeAssessmentTemplatesInput::parse_response(&response(
            200,
            r#"{"assessmentTemplates":[],"failedItems":{"arn:1":{"failureCode":"ITEM_DOES_NOT_EXIST","retryable":false}}}"#,
        ))
        .expect("valid body");
        assert_eq!(output.assessment_templates, Some(vec![]));
        let failed = output.failed_items.expect("failed items are present");
        assert_eq!(
            failed["arn:1"].failure_code,
            Some(FailedItemErrorCode::ItemDoesNotExist)
        );
    }

    #[test]
    fn errors_are_translated() {
        let err = ListTagsForResourceInput::parse_response(&response(
            400,
            r#"{"__type":"InvalidInputException","message":"bad arn","canRetry":false}"#,
        ))
        .expect_err("error status");
        assert!(matches!(err.kind, ErrorKind::InvalidInputException));
        assert_eq!(err.message(), Some("bad arn"));
    }
}
