//! `data:` URI encoding and decoding (RFC 2397).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use imageshelf_common::{Error, Result};

/// Media type assumed when a `data:` URI does not declare one.
const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// A decoded `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Encode `data` as `data:<mime_type>;base64,<payload>`.
pub fn encode(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(data))
}

/// Whether `s` looks like a `data:` URI.
pub fn is_data_uri(s: &str) -> bool {
    s.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Decode a `data:` URI.
///
/// Base64 payloads are decoded as such; anything else is taken as
/// percent-encoded bytes.
pub fn decode(uri: &str) -> Result<DataUri> {
    if !is_data_uri(uri) {
        return Err(Error::decode("Not a data URI"));
    }

    let (header, payload) = uri[5..]
        .split_once(',')
        .ok_or_else(|| Error::decode("Data URI has no ',' separator"))?;

    let (media_type, is_base64) = match header.strip_suffix(";base64") {
        Some(media_type) => (media_type, true),
        None => (header, false),
    };

    let mime_type = media_type
        .split(';')
        .next()
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MEDIA_TYPE)
        .to_string();

    let data = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        STANDARD
            .decode(compact)
            .map_err(|e| Error::decode(format!("Invalid base64 in data URI: {}", e)))?
    } else {
        percent_decode(payload)?
    };

    Ok(DataUri { mime_type, data })
}

fn percent_decode(s: &str) -> Result<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| Error::decode("Invalid percent-escape in data URI"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_bytes() {
        assert_eq!(encode("image/png", b"hello"), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_encode_decode_is_byte_identical() {
        let data: Vec<u8> = (0..=255).collect();
        let decoded = decode(&encode("image/webp", &data)).unwrap();
        assert_eq!(decoded.mime_type, "image/webp");
        assert_eq!(decoded.data, data);
    }

    #[test]
    fn test_decode_percent_encoded() {
        let decoded = decode("data:,a%20b%2C").unwrap();
        assert_eq!(decoded.mime_type, "text/plain");
        assert_eq!(decoded.data, b"a b,");
    }

    #[test]
    fn test_decode_with_parameters() {
        let decoded = decode("data:image/svg+xml;charset=utf-8;base64,PHN2Zy8+").unwrap();
        assert_eq!(decoded.mime_type, "image/svg+xml");
        assert_eq!(decoded.data, b"<svg/>");
    }

    #[test]
    fn test_decode_ignores_whitespace_in_base64() {
        let decoded = decode("data:image/png;base64,aGVs\nbG8=").unwrap();
        assert_eq!(decoded.data, b"hello");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("https://x/y.png"), Err(Error::Decode(_))));
        assert!(matches!(decode("data:image/png;base64"), Err(Error::Decode(_))));
        assert!(matches!(decode("data:image/png;base64,@@@"), Err(Error::Decode(_))));
        assert!(matches!(decode("data:,bad%zz"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_is_data_uri_case_insensitive() {
        assert!(is_data_uri("DATA:image/png;base64,"));
        assert!(!is_data_uri("dat"));
    }
}
