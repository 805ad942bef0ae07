//! Diagnostic logging to stderr.

use log::LevelFilter;

/// Level used when `verbose` is requested or not.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging for the application.
///
/// Diagnostics go to stderr only, so stdout carries nothing but the signature
/// or token. Should be called once at the start of `main()`.
///
/// # Errors
///
/// Returns an error if a global logger is already installed.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}  {} {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                message
            ))
        })
        .level(level_for(verbose))
        .chain(std::io::stderr())
        .apply()
}
