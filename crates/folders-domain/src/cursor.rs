use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DomainError, DomainResult};

/// Tag prepended to the resume index before encoding
const CURSOR_TAG: &str = "next_cursor";

/// Encode a resume index as an opaque cursor token
pub fn encode_cursor(index: usize) -> String {
    STANDARD.encode(format!("{CURSOR_TAG}:{index}"))
}

/// Decode a cursor token back into a resume index
///
/// An empty cursor decodes to index 0. The tag before the separator is
/// carried but not validated.
pub fn decode_cursor(cursor: &str) -> DomainResult<usize> {
    if cursor.is_empty() {
        return Ok(0);
    }

    let decoded = STANDARD
        .decode(cursor)
        .map_err(|_| DomainError::InvalidCursor)?;
    let decoded = String::from_utf8(decoded).map_err(|_| DomainError::InvalidCursor)?;

    let (_tag, index) = decoded.split_once(':').ok_or(DomainError::InvalidCursor)?;

    index
        .parse::<usize>()
        .map_err(|_| DomainError::InvalidCursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        for index in [0, 1, 5, 99, 12_345] {
            let encoded = encode_cursor(index);
            assert_eq!(decode_cursor(&encoded).unwrap(), index);
        }
    }

    #[test]
    fn test_decode_empty_cursor() {
        assert_eq!(decode_cursor("").unwrap(), 0);
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode_cursor("ThisIsNotBase64!");
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }

    #[test]
    fn test_decode_garbage_token() {
        // Decodes as base64 but does not yield a tag:index payload
        let result = decode_cursor("invalidToken");
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }

    #[test]
    fn test_decode_missing_separator() {
        let token = STANDARD.encode("next_cursor7");
        let result = decode_cursor(&token);
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }

    #[test]
    fn test_decode_non_numeric_index() {
        let token = STANDARD.encode("next_cursor:seven");
        let result = decode_cursor(&token);
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }

    #[test]
    fn test_decode_negative_index() {
        let token = STANDARD.encode("next_cursor:-1");
        let result = decode_cursor(&token);
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }

    #[test]
    fn test_decode_tolerates_foreign_tag() {
        let token = STANDARD.encode("resume_at:7");
        assert_eq!(decode_cursor(&token).unwrap(), 7);
    }

    #[test]
    fn test_decode_extra_separator_fails() {
        let token = STANDARD.encode("next_cursor:5:9");
        let result = decode_cursor(&token);
        assert!(matches!(result, Err(DomainError::InvalidCursor)));
    }
}
