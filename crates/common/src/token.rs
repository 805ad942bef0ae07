//! Compact token assembly.
//!
//! `base64url(header) "." base64url(payload) "." base64url(signature)`, where the
//! signature covers the first two segments joined by the period.

use error_stack::{Report, ResultExt};
use serde::Serialize;

use crate::encoding::{encode_bytes, encode_segment};
use crate::error::SignerError;
use crate::header::Header;
use crate::signing::RsaSigner;

/// Builds and signs compact tokens with a single key.
#[derive(Debug)]
pub struct TokenBuilder<'a> {
    signer: &'a RsaSigner,
    kid: String,
}

impl<'a> TokenBuilder<'a> {
    #[must_use]
    pub fn new(signer: &'a RsaSigner) -> Self {
        Self {
            signer,
            kid: String::new(),
        }
    }

    /// Sets the key identifier; an empty string leaves `kid` out of the header.
    #[must_use]
    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = kid.into();
        self
    }

    #[must_use]
    pub fn header(&self) -> Header {
        Header::new(self.signer.algorithm(), &self.kid)
    }

    /// Encodes header and payload into the text that gets signed.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Encoding`] if either part cannot be serialized.
    pub fn signing_input<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> Result<String, Report<SignerError>> {
        let header64 = encode_segment(&self.header()).attach("while encoding header")?;
        let payload64 = encode_segment(payload).attach("while encoding payload")?;

        let mut signing_input = String::with_capacity(header64.len() + 1 + payload64.len());
        signing_input.push_str(&header64);
        signing_input.push('.');
        signing_input.push_str(&payload64);

        Ok(signing_input)
    }

    /// Produces the signed three-segment token for `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Encoding`] if the payload cannot be serialized and
    /// [`SignerError::Signing`] if the signature cannot be produced.
    pub fn build<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String, Report<SignerError>> {
        let signing_input = self.signing_input(payload)?;
        let signature = self
            .signer
            .sign(signing_input.as_bytes())
            .attach("while signing token")?;

        log::debug!(
            "Built {} token: kid={}, signing input {} bytes, signature {} bytes",
            self.signer.algorithm(),
            !self.kid.is_empty(),
            signing_input.len(),
            signature.len()
        );

        Ok(format!("{signing_input}.{}", encode_bytes(&signature)))
    }
}

/// Convenience wrapper around [`TokenBuilder`].
///
/// # Errors
///
/// See [`TokenBuilder::build`].
pub fn build_compact_token<T: Serialize + ?Sized>(
    signer: &RsaSigner,
    kid: &str,
    payload: &T,
) -> Result<String, Report<SignerError>> {
    TokenBuilder::new(signer).with_kid(kid).build(payload)
}

/// Parses JSON bytes into a payload value.
///
/// Exactly one JSON document is accepted; trailing whitespace is allowed.
///
/// # Errors
///
/// Returns [`SignerError::Io`] on read failures and [`SignerError::InvalidInput`]
/// if the input is not a single JSON document.
pub fn read_payload<R: std::io::Read>(reader: R) -> Result<serde_json::Value, Report<SignerError>> {
    serde_json::from_reader(reader).map_err(|e| {
        let context = if e.is_io() {
            SignerError::Io {
                message: "failed to read payload".into(),
            }
        } else {
            SignerError::InvalidInput {
                message: "payload is not a single JSON document".into(),
            }
        };
        Report::new(e).change_context(context)
    })
}
