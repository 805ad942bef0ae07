//! Core of the `simplejwt` signing tools.
//!
//! This crate turns a parsed RSA private key and caller-supplied data into
//! either a bare RS256 signature or a signed compact token
//! (`header.payload.signature`).
//!
//! # Modules
//!
//! - [`encoding`]: Canonical base64url segment encoding
//! - [`error`]: Error taxonomy shared by the core and the CLI
//! - [`header`]: Algorithm selection and ordered JOSE header
//! - [`keys`]: PEM / PKCS#8 key loading and key-family checks
//! - [`logging`]: Diagnostic logger setup
//! - [`settings`]: Layered configuration (TOML file + environment)
//! - [`signing`]: SHA-256 digest and PKCS#1 v1.5 signing
//! - [`token`]: Compact token assembly
//! - [`test_support`]: Testing fixtures

pub mod encoding;
pub mod error;
pub mod header;
pub mod keys;
pub mod logging;
pub mod settings;
pub mod signing;
pub mod test_support;
pub mod token;
