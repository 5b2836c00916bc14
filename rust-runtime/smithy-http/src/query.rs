/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::urlencode::BASE_SET;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    percent_encoding::utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends `key=value` pairs to a URI that may already carry a literal query.
#[derive(Debug)]
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// Both the key and the value are percent-encoded.
    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(k));
        self.out.push('=');
        self.out.push_str(&fmt_string(v));
        self.prefix = '&';
    }

    /// Push a key with no value, eg. the `uploads` in `?uploads`
    pub fn push_v(&mut self, k: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(k));
        self.prefix = '&';
    }
}
