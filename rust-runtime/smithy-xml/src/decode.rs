/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Read an XML document into a lightweight element tree.
//!
//! Namespace prefixes are dropped: elements are matched by their local name only.
//!
//! ```rust
//! let doc = smithy_xml::decode::Document::parse(
//!     b"<ErrorResponse><Error><Code>InvalidInput</Code></Error></ErrorResponse>",
//! )
//! .unwrap();
//! let code = doc.root().child("Error").and_then(|err| err.child_text("Code"));
//! assert_eq!(code, Some("InvalidInput"));
//! ```

use crate::escape::unescape;
use std::borrow::Cow;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

#[derive(Debug, Error)]
pub enum XmlDecodeError {
    #[error("invalid XML: {0}")]
    InvalidXml(#[from] xmlparser::Error),
    #[error("invalid XML escape: {0}")]
    InvalidEscape(Cow<'static, str>),
    #[error("error parsing XML: {0}")]
    Custom(Cow<'static, str>),
}

impl XmlDecodeError {
    pub(crate) fn invalid_escape(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError::InvalidEscape(msg.into())
    }

    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError::Custom(msg.into())
    }
}

/// An XML element with its unescaped text and its child elements, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Local name of the element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content directly inside this element
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first child element named `name`
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|el| el.name == name)
    }

    /// Every child element named `name`
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |el| el.name == name)
    }

    /// Every child element
    pub fn elements(&self) -> &[Element] {
        &self.children
    }

    /// Text of the first child element named `name`
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|el| el.text())
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(body: &[u8]) -> Result<Self, XmlDecodeError> {
        let body = std::str::from_utf8(body)
            .map_err(|_| XmlDecodeError::custom("XML document was not valid UTF-8"))?;
        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;
        for token in Tokenizer::from(body) {
            match token? {
                Token::ElementStart { local, .. } => stack.push(Element::new(local.as_str())),
                Token::ElementEnd {
                    end: ElementEnd::Open,
                    ..
                } => {}
                Token::ElementEnd {
                    end: ElementEnd::Close(_, local),
                    ..
                } => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| XmlDecodeError::custom("unbalanced closing tag"))?;
                    if el.name != local.as_str() {
                        return Err(XmlDecodeError::custom(format!(
                            "expected </{}>, found </{}>",
                            el.name,
                            local.as_str()
                        )));
                    }
                    close(&mut stack, &mut root, el)?;
                }
                Token::ElementEnd {
                    end: ElementEnd::Empty,
                    ..
                } => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| XmlDecodeError::custom("unbalanced closing tag"))?;
                    close(&mut stack, &mut root, el)?;
                }
                Token::Text { text } => {
                    if let Some(el) = stack.last_mut() {
                        el.text.push_str(&unescape(text.as_str())?);
                    }
                }
                Token::Cdata { text, .. } => {
                    if let Some(el) = stack.last_mut() {
                        el.text.push_str(text.as_str());
                    }
                }
                _ => {}
            }
        }
        if !stack.is_empty() {
            return Err(XmlDecodeError::custom("unexpected end of document"));
        }
        root.map(|root| Document { root })
            .ok_or_else(|| XmlDecodeError::custom("no root element"))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}

fn close(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), XmlDecodeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(XmlDecodeError::custom("more than one root element")),
    }
    Ok(())
}
