/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Everything except the unreserved characters `A-Z a-z 0-9 - . _ ~`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn percent_encode_query(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Encodes an already escaped path a second time. Only `%` can be left to escape.
pub(crate) fn percent_encode_path(value: &str) -> String {
    value.replace('%', "%25")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_escaping() {
        assert_eq!(percent_encode_query("a b+c/d~e"), "a%20b%2Bc%2Fd~e");
    }

    #[test]
    fn path_double_escaping() {
        assert_eq!(percent_encode_path("/-/vaults/my%20vault"), "/-/vaults/my%2520vault");
        assert_eq!(percent_encode_path("/-/vaults"), "/-/vaults");
    }
}
