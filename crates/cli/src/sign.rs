//! Raw signing: SHA-256 over stdin, RS256 signature out.

use std::io::{Read, Write};

use error_stack::Report;

use simplejwt_common::encoding::encode_bytes;
use simplejwt_common::error::SignerError;
use simplejwt_common::signing::RsaSigner;

use crate::output::write_output;

/// Signs everything readable from `input` and writes the base64url signature.
///
/// # Errors
///
/// Returns [`SignerError::Io`] for read or write failures and
/// [`SignerError::Signing`] if the signature cannot be produced.
pub fn run<R: Read, W: Write>(
    signer: &RsaSigner,
    input: R,
    output: &mut W,
) -> Result<(), Report<SignerError>> {
    let signature = signer.sign_reader(input)?;
    log::debug!("Produced {}-byte signature", signature.len());

    write_output(output, &encode_bytes(&signature))
}
