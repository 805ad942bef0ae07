//! Token mode: JSON document in, signed compact token out.

use std::io::{Read, Write};

use error_stack::Report;

use simplejwt_common::error::SignerError;
use simplejwt_common::signing::RsaSigner;
use simplejwt_common::token::{build_compact_token, read_payload};

use crate::output::write_output;

/// Reads a JSON payload from `input` and writes the signed token to `output`.
///
/// Nothing is written unless the whole token was built.
///
/// # Errors
///
/// Returns [`SignerError::InvalidInput`] if `input` is not one JSON document,
/// [`SignerError::Encoding`] / [`SignerError::Signing`] from the builder, and
/// [`SignerError::Io`] for read or write failures.
pub fn run<R: Read, W: Write>(
    signer: &RsaSigner,
    kid: &str,
    input: R,
    output: &mut W,
) -> Result<(), Report<SignerError>> {
    let payload = read_payload(input)?;
    let token = build_compact_token(signer, kid, &payload)?;

    write_output(output, &token)
}
