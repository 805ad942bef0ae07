//! RS256 signing CLI.
//!
//! This tool provides commands for:
//! - Signing raw stdin bytes and printing the base64url signature
//! - Building a signed compact token (`header.payload.signature`) from a JSON
//!   document on stdin
//!
//! The private key is read from `PRIVATE_KEY_PEM` (or `--private-key-pem` /
//! `--private-key-file`, or the settings file). Diagnostics go to stderr;
//! stdout only ever carries the final signature or token.

use clap::{Parser, Subcommand};
use error_stack::Report;
use std::io;
use std::path::PathBuf;

use simplejwt_common::error::SignerError;
use simplejwt_common::logging::init_logging;
use simplejwt_common::settings::Settings;

mod key;
mod output;
mod sign;
mod token;

use key::KeyArgs;

#[derive(Parser)]
#[command(name = "simplejwt")]
#[command(about = "Sign stdin with an RSA key or build RS256 compact tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an optional TOML settings file
    #[arg(long, short, global = true, env = "SIMPLEJWT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign raw stdin bytes and print the base64url signature
    Sign {
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Build a signed compact token from a JSON document on stdin
    Token {
        /// Key identifier placed in the token header
        #[arg(long)]
        kid: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Report<SignerError>> {
    let settings = Settings::load(cli.config.as_deref())?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Sign { key } => {
            let signer = key.load_signer(&settings)?;
            sign::run(&signer, stdin, &mut stdout)
        }
        Commands::Token { kid, key } => {
            let signer = key.load_signer(&settings)?;
            let kid = kid
                .or_else(|| settings.signing.kid.clone())
                .unwrap_or_default();
            token::run(&signer, &kid, stdin, &mut stdout)
        }
    }
}
