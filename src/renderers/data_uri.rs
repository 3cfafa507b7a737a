//! Data URI encoding for export artifacts

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Percent-encode with `encodeURIComponent` semantics: everything except
/// ASCII alphanumerics and `-_.!~*'()` is escaped byte-wise as UTF-8.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len() * 3 / 2);
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    out
}

/// Inverse of [`encode_uri_component`]. Truncated or non-hex escapes and
/// sequences that are not UTF-8 yield `None`.
pub fn decode_uri_component(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Wrap serialized SVG markup as a percent-encoded data URI
pub fn svg_data_uri(markup: &str) -> String {
    format!("{}{}", SVG_DATA_URI_PREFIX, encode_uri_component(markup))
}

/// Markup carried by a URI built with [`svg_data_uri`]
pub fn svg_markup(uri: &str) -> Option<String> {
    decode_uri_component(uri.strip_prefix(SVG_DATA_URI_PREFIX)?)
}

/// Wrap PNG bytes as a base64 data URI
pub fn png_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, BASE64.encode(png))
}

/// MIME type of a `data:` URI, if it is one
pub fn mime_type(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix("data:")?;
    let header = &rest[..rest.find(',')?];
    Some(header.split(';').next().unwrap_or(header))
}
