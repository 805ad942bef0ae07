//! Canonical segment encoding.
//!
//! A segment is the compact JSON serialization of a value, encoded with the
//! URL-safe base64 alphabet and no `=` padding.

use base64::{engine::general_purpose, Engine};
use error_stack::{Report, ResultExt};
use serde::Serialize;

use crate::error::SignerError;

/// Encodes raw bytes as unpadded base64url.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Serializes `value` to compact JSON and encodes it as a token segment.
///
/// # Errors
///
/// Returns [`SignerError::Encoding`] if the value has no JSON representation
/// (for example a map keyed by something other than strings).
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> Result<String, Report<SignerError>> {
    let json = serde_json::to_vec(value).change_context(SignerError::Encoding {
        message: "value cannot be serialized as JSON".into(),
    })?;

    Ok(encode_bytes(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tests::decode_segment;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_encode_segment_matches_known_value() {
        let segment = encode_segment(&json!({"sub": "alice"})).expect("should encode");
        assert_eq!(segment, "eyJzdWIiOiJhbGljZSJ9");
    }

    #[test]
    fn test_encode_segment_is_unpadded_and_url_safe() {
        // 0xfb 0xff encodes to "-_8" in base64url, "+/8=" in standard base64
        let segment = encode_bytes(&[0xfb, 0xff]);
        assert_eq!(segment, "-_8");

        let segment = encode_segment(&json!("??>")).expect("should encode");
        assert!(!segment.contains('='));
        assert!(!segment.contains('+'));
        assert!(!segment.contains('/'));
    }

    #[test]
    fn test_object_keys_are_sorted() {
        let a: serde_json::Value =
            serde_json::from_str(r#"{"b":1,"a":2,"c":{"z":true,"y":null}}"#).expect("valid json");
        let b: serde_json::Value =
            serde_json::from_str(r#"{"c":{"y":null,"z":true},"a":2,"b":1}"#).expect("valid json");

        assert_eq!(
            encode_segment(&a).expect("should encode"),
            encode_segment(&b).expect("should encode")
        );
        assert_eq!(
            decode_segment(&encode_segment(&a).expect("should encode")),
            a
        );
    }

    #[test]
    fn test_scalar_and_array_payloads() {
        for value in [json!(42), json!("text"), json!(null), json!([1, "two", 3.5])] {
            let segment = encode_segment(&value).expect("should encode");
            assert!(!segment.is_empty());
            assert_eq!(decode_segment(&segment), value);
        }
    }

    #[test]
    fn test_large_integers_keep_precision() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"n":9007199254740993}"#).expect("valid json");
        let segment = encode_segment(&value).expect("should encode");
        let decoded = general_purpose::URL_SAFE_NO_PAD
            .decode(segment)
            .expect("valid base64");
        assert_eq!(decoded, br#"{"n":9007199254740993}"#);
    }

    #[test]
    fn test_html_characters_are_not_escaped() {
        let segment = encode_segment(&json!({"q": "<a>&"})).expect("should encode");
        assert_eq!(segment, encode_bytes(br#"{"q":"<a>&"}"#));
        assert_ne!(
            segment,
            encode_bytes(br#"{"q":"\u003ca\u003e\u0026"}"#)
        );
    }

    #[test]
    fn test_non_string_map_keys_fail() {
        let mut value = HashMap::new();
        value.insert((1, 2), "tuple keys have no JSON form");

        let err = encode_segment(&value).expect_err("should fail");
        assert!(matches!(
            err.current_context(),
            SignerError::Encoding { .. }
        ));
    }
}
