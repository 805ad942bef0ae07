use thiserror::Error;

/// Failure categories for key loading, encoding, signing and the I/O around them.
///
/// Every variant is terminal for an invocation. Call sites wrap these in an
/// [`error_stack::Report`] and attach the underlying cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("Key load error: {message}")]
    KeyLoad { message: String },

    #[error("Key type error: {message}")]
    KeyType { message: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}
