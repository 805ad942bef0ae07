//! Writing the final signature or token to the output sink.

use std::io::Write;

use error_stack::{Report, ResultExt};

use simplejwt_common::error::SignerError;

/// Writes the final result with no trailing newline and flushes.
///
/// # Errors
///
/// Returns [`SignerError::Io`] if the sink rejects the write or flush.
pub fn write_output<W: Write>(output: &mut W, text: &str) -> Result<(), Report<SignerError>> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .change_context(SignerError::Io {
            message: "failed to write output".into(),
        })
}
