//! Private key acquisition for the signing commands.

use std::path::PathBuf;

use clap::Args;
use error_stack::Report;

use simplejwt_common::error::SignerError;
use simplejwt_common::keys::{KeySource, PRIVATE_KEY_PEM_ENV};
use simplejwt_common::settings::Settings;
use simplejwt_common::signing::RsaSigner;

#[derive(Args, Debug, Default)]
pub struct KeyArgs {
    /// PEM-encoded PKCS#8 RSA private key
    #[arg(long, env = PRIVATE_KEY_PEM_ENV, hide_env_values = true, value_name = "PEM")]
    pub private_key_pem: Option<String>,

    /// Path to a PEM-encoded PKCS#8 RSA private key
    #[arg(long, value_name = "PATH")]
    pub private_key_file: Option<PathBuf>,
}

impl KeyArgs {
    /// Resolves the key source and loads the signer.
    ///
    /// Flags (and `PRIVATE_KEY_PEM`) take precedence over the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::KeyLoad`] when no source is configured or the key
    /// cannot be parsed, and [`SignerError::KeyType`] for non-RSA keys.
    pub fn load_signer(self, settings: &Settings) -> Result<RsaSigner, Report<SignerError>> {
        let source = KeySource::resolve(self.private_key_pem, self.private_key_file)
            .or_else(|| {
                KeySource::resolve(
                    settings.signing.private_key_pem.clone(),
                    settings.signing.private_key_file.clone(),
                )
            })
            .ok_or_else(|| {
                Report::new(SignerError::KeyLoad {
                    message: format!("environment variable {PRIVATE_KEY_PEM_ENV} is missing"),
                })
            })?;

        Ok(RsaSigner::new(source.load()?))
    }
}
