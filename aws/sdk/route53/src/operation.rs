/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP bindings of the Route 53 operations.

use crate::config::Config;
use crate::error::Error;
use crate::input::{ChangeTagsForResourceInput, GetHostedZoneLimitInput, ListTagsForResourceInput};
use crate::model::{HostedZoneLimit, ResourceTagSet};
use crate::output::{
    ChangeTagsForResourceOutput, GetHostedZoneLimitOutput, ListTagsForResourceOutput,
};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use smithy_http::operation::{self, BuildError, Metadata, Operation};
use smithy_http::shape::{HttpOperation, OperationShape, ResponseParser};
use smithy_xml::decode::{Document, Element, XmlDecodeError};

const SERVICE: &str = "route53";
const RESOURCE: &[&str] = &["ResourceType", "ResourceId"];

/// Build the operation that sends `input`
///
/// Fails without side effects when a required member was never set.
pub fn make_operation<I>(
    input: &I,
    conf: &Config,
) -> Result<Operation<ResponseParser<I>>, BuildError>
where
    I: HttpOperation<Error = Error>,
{
    let mut request = I::SHAPE.request(input)?;
    if request.headers().contains_key(CONTENT_LENGTH) {
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    }
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

/// Parse a successful response into its root element, named `root`
fn parse_document(response: &http::Response<Bytes>, root: &str) -> Result<Element, Error> {
    if !response.status().is_success() {
        return Err(Error::from_response(response));
    }
    let doc = Document::parse(response.body()).map_err(Error::unhandled)?;
    let el = doc.into_root();
    if el.name() != root {
        return Err(Error::unhandled(XmlDecodeError::custom(format!(
            "expected <{}>, found <{}>",
            root,
            el.name()
        ))));
    }
    Ok(el)
}

impl HttpOperation for GetHostedZoneLimitInput {
    type Output = GetHostedZoneLimitOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "GetHostedZoneLimit",
        method: Method::GET,
        uri: "/2013-04-01/hostedzonelimit/{Id}/{Type}",
        required: &["Type", "HostedZoneId"],
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<GetHostedZoneLimitOutput, Error> {
        let root = parse_document(response, "GetHostedZoneLimitResponse")?;
        let count = match root.child_text("Count") {
            Some(count) => Some(count.trim().parse::<i64>().map_err(Error::unhandled)?),
            None => None,
        };
        Ok(GetHostedZoneLimitOutput {
            limit: root
                .child("Limit")
                .map(HostedZoneLimit::from_xml)
                .transpose()
                .map_err(Error::unhandled)?,
            count,
        })
    }
}

impl HttpOperation for ListTagsForResourceInput {
    type Output = ListTagsForResourceOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "ListTagsForResource",
        method: Method::GET,
        uri: "/2013-04-01/tags/{ResourceType}/{ResourceId}",
        required: RESOURCE,
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<ListTagsForResourceOutput, Error> {
        let root = parse_document(response, "ListTagsForResourceResponse")?;
        Ok(ListTagsForResourceOutput {
            resource_tag_set: root
                .child("ResourceTagSet")
                .map(ResourceTagSet::from_xml)
                .transpose()
                .map_err(Error::unhandled)?,
        })
    }
}

impl HttpOperation for ChangeTagsForResourceInput {
    type Output = ChangeTagsForResourceOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "ChangeTagsForResource",
        method: Method::POST,
        uri: "/2013-04-01/tags/{ResourceType}/{ResourceId}",
        required: RESOURCE,
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<ChangeTagsForResourceOutput, Error> {
        if !response.status().is_success() {
            return Err(Error::from_response(response));
        }
        Ok(ChangeTagsForResourceOutput {})
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::error::ErrorKind;
    use crate::input::{ChangeTagsForResourceInput, GetHostedZoneLimitInput};
    use crate::model::{HostedZoneLimitType, Tag, TagResourceType};
    use crate::operation::make_operation;
    use bytes::Bytes;
    use smithy_http::operation::BuildError;
    use smithy_http::shape::HttpOperation;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn required_members_in_order() {
        let input = GetHostedZoneLimitInput::builder()
            .hosted_zone_id("Z1")
            .build();
        match make_operation(&input, &Config::builder().build()) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "Type"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("Type is required"),
        }
        let input = GetHostedZoneLimitInput::builder()
            .r#type(HostedZoneLimitType::MaxRrsetsByZone)
            .build();
        match make_operation(&input, &Config::builder().build()) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "HostedZoneId"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("HostedZoneId is required"),
        }
    }

    #[test]
    fn change_tags_request() {
        let input = ChangeTagsForResourceInput::builder()
            .resource_type(TagResourceType::Healthcheck)
            .resource_id("abc/def")
            .add_tags(Tag::builder().key("k").value("v").build())
            .build();
        let (request, _) = make_operation(&input, &Config::builder().build())
            .unwrap()
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/2013-04-01/tags/healthcheck/abc%2Fdef");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/xml"
        );
        assert!(request.body().bytes().unwrap().starts_with(b"<ChangeTagsForResourceRequest"));
    }

    #[test]
    fn hosted_zone_limit_response() {
        let output = GetHostedZoneLimitInput::parse_response(&response(
            200,
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <GetHostedZoneLimitResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                <Limit><Type>MAX_RRSETS_BY_ZONE</Type><Value>10000</Value></Limit>
                <Count>7</Count>
            </GetHostedZoneLimitResponse>"#,
        ))
        .expect("valid document");
        let limit = output.limit.expect("limit is present");
        assert_eq!(limit.r#type, Some(HostedZoneLimitType::MaxRrsetsByZone));
        assert_eq!(limit.value, Some(10_000));
        assert_eq!(output.count, Some(7));
    }

    #[test]
    fn unexpected_root_is_unhandled() {
        let err = GetHostedZoneLimitInput::parse_response(&response(200, "<Other/>"))
            .expect_err("wrong document");
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    }
}
