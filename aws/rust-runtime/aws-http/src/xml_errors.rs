/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error parsing for the restXml protocol.
//!
//! Errors are wrapped: `<ErrorResponse><Error>...</Error><RequestId/></ErrorResponse>`. A bare
//! `<Error>` root is accepted as well.

use smithy_xml::decode::{Document, XmlDecodeError};

pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlDecodeError> {
    let doc = Document::parse(body)?;
    let root = doc.root();
    let error = match root.name() {
        "ErrorResponse" => root
            .child("Error")
            .ok_or_else(|| XmlDecodeError::custom("no <Error> inside <ErrorResponse>"))?,
        "Error" => root,
        other => {
            return Err(XmlDecodeError::custom(format!(
                "expected <ErrorResponse> or <Error>, found <{}>",
                other
            )))
        }
    };

    let mut err = smithy_types::Error::builder();
    if let Some(code) = error.child_text("Code") {
        err.code(code);
    }
    if let Some(message) = error.child_text("Message") {
        err.message(message);
    }
    if let Some(ty) = error.child_text("Type") {
        err.custom("Type", ty);
    }
    if let Some(request_id) = root
        .child_text("RequestId")
        .or_else(|| error.child_text("RequestId"))
    {
        err.request_id(request_id);
    }
    let err = err.build();
    if err.code().is_none() {
        tracing::debug!(root = root.name(), "error response carried no code");
    }
    Ok(err)
}

#[cfg(test)]
mod test {
    use crate::xml_errors::parse_generic_error;

    #[test]
    fn wrapped_error() {
        let xml = br#"<ErrorResponse>
            <Error>
                <Type>Sender</Type>
                <Code>InvalidInput</Code>
                <Message>Invalid resource type: widget</Message>
            </Error>
            <RequestId>foo-id</RequestId>
        </ErrorResponse>"#;
        let err = parse_generic_error(xml).expect("valid error");
        assert_eq!(err.code(), Some("InvalidInput"));
        assert_eq!(err.message(), Some("Invalid resource type: widget"));
        assert_eq!(err.request_id(), Some("foo-id"));
        assert_eq!(err.extra("Type"), Some("Sender"));
    }

    #[test]
    fn unwrapped_error() {
        let xml = br#"<Error><Code>NoSuchHostedZone</Code><RequestId>abc</RequestId></Error>"#;
        let err = parse_generic_error(xml).expect("valid error");
        assert_eq!(err.code(), Some("NoSuchHostedZone"));
        assert_eq!(err.message(), None);
        assert_eq!(err.request_id(), Some("abc"));
    }

    #[test]
    fn not_an_error_document() {
        assert!(parse_generic_error(b"<Hello/>").is_err());
        assert!(parse_generic_error(b"").is_err());
    }
}
