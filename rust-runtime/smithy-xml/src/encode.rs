/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! XML Encoding module that uses Rust lifetimes to make
//! generating malformed XML a compile error

use crate::escape::escape;

/// XmlWriter Abstraction
///
/// XmlWriter (and friends) make generating an invalid XML document a type error. Nested branches
/// of the Xml document mutable borrow from the root. You cannot continue writing to the root
/// until the nested branch is finished, and finishing it writes the closing element.
///
/// The one exception to this rule is names: element names are not validated. They are always
/// static strings, so an invalid name is visible in the code.
///
/// # Example
/// ```rust
/// use smithy_xml::encode::XmlWriter;
/// let mut s = String::new();
/// let mut doc = XmlWriter::new(&mut s);
/// let mut start_el = doc.start_el("Root")
///     .write_ns("http://example.com", None);
/// let mut start_tag = start_el.finish();
/// start_tag.data("hello");
/// start_tag.finish();
/// assert_eq!(s, "<Root xmlns=\"http://example.com\">hello</Root>");
/// ```
pub struct XmlWriter<'a> {
    doc: &'a mut String,
}

impl<'a> XmlWriter<'a> {
    pub fn new(doc: &'a mut String) -> Self {
        Self { doc }
    }
}

impl<'a> XmlWriter<'a> {
    pub fn start_el<'b, 'c>(&'c mut self, tag: &'b str) -> ElWriter<'c, 'b> {
        write_start(self.doc, tag);
        ElWriter::new(self.doc, tag)
    }
}

fn write_start(doc: &mut String, tag: &str) {
    doc.push('<');
    doc.push_str(tag);
}

pub struct ElWriter<'a, 'b> {
    start: &'b str,
    doc: &'a mut String,
}

impl<'a, 'b> ElWriter<'a, 'b> {
    fn new(doc: &'a mut String, start: &'b str) -> ElWriter<'a, 'b> {
        ElWriter { start, doc }
    }

    pub fn write_attribute(self, key: &str, value: &str) -> Self {
        self.doc.push(' ');
        self.doc.push_str(key);
        self.doc.push_str("=\"");
        self.doc.push_str(&escape(value));
        self.doc.push('"');
        self
    }

    pub fn write_ns(self, namespace: &str, prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) => {
                let key = format!("xmlns:{}", prefix);
                self.write_attribute(&key, namespace)
            }
            None => self.write_attribute("xmlns", namespace),
        }
    }

    pub fn finish(self) -> ScopeWriter<'a, 'b> {
        self.doc.push('>');
        ScopeWriter {
            doc: self.doc,
            start: self.start,
        }
    }
}

/// Wrap the construction of a tag pair `<a></a>`
pub struct ScopeWriter<'a, 'b> {
    doc: &'a mut String,
    start: &'b str,
}

impl<'a, 'b> ScopeWriter<'a, 'b> {
    pub fn data(&mut self, data: &str) {
        self.doc.push_str(&escape(data));
    }

    pub fn start_el<'b1, 'c>(&'c mut self, tag: &'b1 str) -> ElWriter<'c, 'b1> {
        write_start(self.doc, tag);
        ElWriter::new(self.doc, tag)
    }

    /// Write `<tag>data</tag>`
    pub fn text_el(&mut self, tag: &str, data: &str) {
        let mut inner = self.start_el(tag).finish();
        inner.data(data);
        inner.finish();
    }

    pub fn finish(self) {
        self.doc.push_str("</");
        self.doc.push_str(self.start);
        self.doc.push('>');
    }
}

#[cfg(test)]
mod test {
    use crate::encode::XmlWriter;

    #[test]
    fn basic_document_encoding() {
        let mut out = String::new();
        let mut doc_writer = XmlWriter::new(&mut out);
        let mut start_el = doc_writer
            .start_el("Hello")
            .write_ns("http://example.com", None)
            .finish();
        start_el.text_el("a", "b < c");
        let mut tags = start_el.start_el("Tags").finish();
        tags.text_el("Key", "k");
        tags.finish();
        start_el.finish();
        assert_eq!(
            out,
            "<Hello xmlns=\"http://example.com\"><a>b &lt; c</a><Tags><Key>k</Key></Tags></Hello>"
        );
    }

    #[test]
    fn escape_attribute_values() {
        let mut out = String::new();
        let mut doc_writer = XmlWriter::new(&mut out);
        doc_writer
            .start_el("Hello")
            .write_attribute("key", "\"<'&>")
            .finish()
            .finish();
        assert_eq!(out, "<Hello key=\"&quot;&lt;&apos;&amp;&gt;\"></Hello>");
    }
}
