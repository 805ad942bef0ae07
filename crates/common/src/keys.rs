//! Private key loading.
//!
//! Key material arrives as PEM-armored PKCS#8 (`PRIVATE KEY`), either inline or
//! from a file. Parsing and the key-family check both happen here so a bad key
//! is rejected before anything is signed.

use std::fs;
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use pkcs8::{ObjectIdentifier, PrivateKeyInfo, SecretDocument};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::error::SignerError;

/// Environment variable that carries the PEM-encoded private key.
pub const PRIVATE_KEY_PEM_ENV: &str = "PRIVATE_KEY_PEM";

const PKCS8_PEM_LABEL: &str = "PRIVATE KEY";

/// `rsaEncryption` from PKCS#1.
const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Where private key material comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Pem(String),
    File(PathBuf),
}

impl KeySource {
    /// Picks the first usable source, preferring inline PEM over a file path.
    ///
    /// Empty PEM strings are treated as unset.
    #[must_use]
    pub fn resolve(pem: Option<String>, file: Option<PathBuf>) -> Option<Self> {
        match pem {
            Some(pem) if !pem.trim().is_empty() => Some(KeySource::Pem(pem)),
            _ => file.map(KeySource::File),
        }
    }

    /// Reads and parses the key.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::KeyLoad`] if the file cannot be read or the PEM is
    /// not a valid PKCS#8 key, and [`SignerError::KeyType`] if the key is not RSA.
    pub fn load(&self) -> Result<RsaPrivateKey, Report<SignerError>> {
        match self {
            KeySource::Pem(pem) => parse_private_key_pem(pem),
            KeySource::File(path) => load_private_key_file(path),
        }
    }
}

fn load_private_key_file(path: &Path) -> Result<RsaPrivateKey, Report<SignerError>> {
    let pem = fs::read_to_string(path).change_context(SignerError::KeyLoad {
        message: format!("failed to read private key file {}", path.display()),
    })?;

    parse_private_key_pem(&pem).attach(format!("while loading {}", path.display()))
}

/// Parses a PEM-armored PKCS#8 RSA private key.
///
/// # Errors
///
/// - [`SignerError::KeyLoad`] if the armor is invalid, the block is not labelled
///   `PRIVATE KEY`, or the DER does not decode to a valid RSA key.
/// - [`SignerError::KeyType`] if the PKCS#8 block holds a non-RSA key.
pub fn parse_private_key_pem(pem: &str) -> Result<RsaPrivateKey, Report<SignerError>> {
    let (label, document) =
        SecretDocument::from_pem(pem.trim()).change_context(SignerError::KeyLoad {
            message: "failed to decode PEM block".into(),
        })?;

    if label != PKCS8_PEM_LABEL {
        return Err(Report::new(SignerError::KeyLoad {
            message: format!("expected a PKCS#8 \"{PKCS8_PEM_LABEL}\" block, found \"{label}\""),
        }));
    }

    let info = PrivateKeyInfo::try_from(document.as_bytes()).change_context(
        SignerError::KeyLoad {
            message: "failed to parse PKCS#8 private key".into(),
        },
    )?;

    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(Report::new(SignerError::KeyType {
            message: "private key is not an RSA key".into(),
        })
        .attach(format!("algorithm OID {}", info.algorithm.oid)));
    }

    let key = RsaPrivateKey::try_from(info).change_context(SignerError::KeyLoad {
        message: "failed to decode RSA private key".into(),
    })?;

    key.validate().change_context(SignerError::KeyLoad {
        message: "RSA private key failed validation".into(),
    })?;

    log::debug!("Loaded RSA private key ({} bits)", key.size() * 8);

    Ok(key)
}
