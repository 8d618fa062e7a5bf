//! Logger setup for the command-line binary.

/// Initializes `env_logger` for user-facing progress output.
///
/// Progress is reported at `info`; `verbose` additionally enables the
/// per-file `debug` records.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}
