//! Digest-and-sign primitive.
//!
//! Inputs are hashed with SHA-256 and the digest is signed with RSASSA-PKCS1-v1_5.
//! The padding is deterministic, so the same key and input always yield the
//! same signature. The RNG is only used for blinding the private-key operation.

use std::io::{self, Read};

use error_stack::{Report, ResultExt};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

use crate::error::SignerError;
use crate::header::Algorithm;

pub struct RsaSigner {
    key: RsaPrivateKey,
    alg: Algorithm,
}

impl RsaSigner {
    #[must_use]
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            key,
            alg: Algorithm::Rs256,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.alg
    }

    /// Signature length in bytes, equal to the modulus size.
    #[must_use]
    pub fn signature_len(&self) -> usize {
        self.key.size()
    }

    /// Signs a precomputed SHA-256 digest.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Signing`] if the digest length does not match the
    /// algorithm or the key is too small for the padded digest.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, Report<SignerError>> {
        let padding = match self.alg {
            Algorithm::Rs256 => Pkcs1v15Sign::new::<Sha256>(),
        };

        self.key
            .sign_with_rng(&mut OsRng, padding, digest)
            .change_context(SignerError::Signing {
                message: format!("{} signing failed", self.alg),
            })
    }

    /// Hashes `data` and signs the digest.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Signing`] if the signing primitive rejects the key.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Report<SignerError>> {
        self.sign_digest(&Sha256::digest(data))
    }

    /// Streams `reader` through SHA-256 and signs the digest.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Io`] if reading fails and [`SignerError::Signing`]
    /// if the signing primitive rejects the key.
    pub fn sign_reader<R: Read>(&self, mut reader: R) -> Result<Vec<u8>, Report<SignerError>> {
        let mut hasher = Sha256::new();
        let read = io::copy(&mut reader, &mut hasher).change_context(SignerError::Io {
            message: "failed to read input".into(),
        })?;
        log::debug!("Hashed {read} input bytes");

        self.sign_digest(&hasher.finalize())
    }
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("alg", &self.alg)
            .field("bits", &(self.key.size() * 8))
            .finish_non_exhaustive()
    }
}
