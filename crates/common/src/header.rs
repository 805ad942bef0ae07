//! JOSE header for compact tokens.
//!
//! The header is serialized through an explicit ordered map so the encoded
//! bytes are identical across runs and implementations: `kid` first when a
//! key identifier was supplied, then `alg` and `typ`.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Token type carried in the `typ` header field.
pub const TOKEN_TYPE: &str = "JWT";

/// Signature algorithm selecting the digest, padding and key family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 with SHA-256 over an RSA key.
    #[default]
    Rs256,
}

impl Algorithm {
    /// Name used in the `alg` header field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Rs256 => "RS256",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub alg: Algorithm,
    pub kid: Option<String>,
}

impl Header {
    /// Builds a header for `alg`, treating an empty key identifier as absent.
    #[must_use]
    pub fn new(alg: Algorithm, kid: &str) -> Self {
        let kid = if kid.is_empty() {
            None
        } else {
            Some(kid.to_string())
        };
        Self { alg, kid }
    }

    /// Header fields in encoding order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::with_capacity(3);
        if let Some(kid) = self.kid.as_deref() {
            fields.push(("kid", kid));
        }
        fields.push(("alg", self.alg.name()));
        fields.push(("typ", TOKEN_TYPE));
        fields
    }
}

impl Serialize for Header {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_kid() {
        let header = Header::new(Algorithm::Rs256, "");
        assert_eq!(header.kid, None);

        let json = serde_json::to_string(&header).expect("header should serialize");
        assert_eq!(json, r#"{"alg":"RS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_header_with_kid_is_first() {
        let header = Header::new(Algorithm::Rs256, "k1");

        let json = serde_json::to_string(&header).expect("header should serialize");
        assert_eq!(json, r#"{"kid":"k1","alg":"RS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_header_kid_is_escaped() {
        let header = Header::new(Algorithm::Rs256, "a\"b");

        let json = serde_json::to_string(&header).expect("header should serialize");
        assert_eq!(json, r#"{"kid":"a\"b","alg":"RS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_algorithm_name() {
        assert_eq!(Algorithm::Rs256.name(), "RS256");
        assert_eq!(Algorithm::default().to_string(), "RS256");
    }
}
