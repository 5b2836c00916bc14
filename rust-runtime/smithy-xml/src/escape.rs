/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlDecodeError;
use std::borrow::Cow;

const ESCAPES: &[char] = &['&', '\'', '\"', '<', '>', '\u{00D}', '\u{00A}'];

pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPES) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            '\n' => out.push_str("&#xA;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Unescape XML encoded characters
///
/// This function will unescape the 4 literal escapes:
/// - `&lt;`, `&gt;`, `&amp;`, `&quot;`, and `&apos;`
/// - Decimal escapes: `&#123;`
/// - Hex escapes: `&#xD;`
///
/// If no escape sequences are present, Cow<&'str> will be returned, avoiding the need
/// to copy the String.
pub(crate) fn unescape(s: &str) -> Result<Cow<'_, str>, XmlDecodeError> {
    // no &, no need to escape anything
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        let end = rest[start..]
            .find(';')
            .ok_or_else(|| XmlDecodeError::invalid_escape("unterminated XML escape"))?;
        res.push_str(&rest[..start]);
        let esc_code = &rest[start + 1..start + end];
        match esc_code {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            _ => {
                let char_code = if let Some(hex) = esc_code.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16)
                } else if let Some(dec) = esc_code.strip_prefix('#') {
                    dec.parse::<u32>()
                } else {
                    return Err(XmlDecodeError::invalid_escape(format!(
                        "unknown escape `&{};`",
                        esc_code
                    )));
                };
                let c = char_code
                    .ok()
                    .and_then(std::char::from_u32)
                    .ok_or_else(|| {
                        XmlDecodeError::invalid_escape(format!("invalid character `&{};`", esc_code))
                    })?;
                res.push(c);
            }
        }
        rest = &rest[start + end + 1..];
    }
    res.push_str(rest);
    Ok(Cow::Owned(res))
}

#[cfg(test)]
mod test {
    use crate::escape::{escape, unescape};
    use std::borrow::Cow;

    #[test]
    fn escape_basic() {
        assert_eq!(escape("a<b>&'c\""), "a&lt;b&gt;&amp;&apos;c&quot;");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn unescape_basic() {
        assert_eq!(unescape("&lt;tag&gt; &amp; &#65;&#x42;").unwrap(), "<tag> & AB");
        assert!(matches!(unescape("plain").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn unescape_invalid() {
        assert!(unescape("&foo;").is_err());
        assert!(unescape("&amp").is_err());
        assert!(unescape("&#xFFFFFFFF;").is_err());
    }

    #[test]
    fn escape_roundtrip() {
        let text = "line one\r\nline <two> & 'three'";
        assert_eq!(unescape(&escape(text)).unwrap(), text);
    }
}
