/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for parsing information from headers

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to parse header `{header}`")]
pub struct ParseError {
    header: String,
}

impl ParseError {
    fn new(header: &str) -> Self {
        ParseError {
            header: header.to_string(),
        }
    }
}

/// Read exactly one or none from a headers iterator
///
/// Members bound to a header are `None` when the header is absent, so a present header is
/// always `Some`, even when its value is empty.
pub fn one_or_none<T>(headers: &http::HeaderMap, key: &str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
{
    let mut values = headers.get_all(key).iter();
    let first = match values.next() {
        Some(value) => value,
        None => return Ok(None),
    };
    if values.next().is_some() {
        return Err(ParseError::new(key));
    }
    let value = first.to_str().map_err(|_| ParseError::new(key))?;
    T::from_str(value.trim())
        .map(Some)
        .map_err(|_| ParseError::new(key))
}

/// Read many comma / header delimited values from HTTP headers for `FromStr` types
pub fn read_many<T>(headers: &http::HeaderMap, key: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
{
    let mut out = vec![];
    for header in headers.get_all(key).iter() {
        let header = header.to_str().map_err(|_| ParseError::new(key))?;
        for value in header.split(',') {
            out.push(T::from_str(value.trim()).map_err(|_| ParseError::new(key))?);
        }
    }
    Ok(out)
}
