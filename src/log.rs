use log::LevelFilter;

/// Initialize logging for consumers of the library.
///
/// The grouping scan emits `debug!`-level traces as groups complete; this
/// helper wires them to stderr via `env_logger`. Calling it is entirely
/// optional — the library works fine with no logger installed.
///
/// # Behavior
/// - Defaults to `Debug` level if `debug_enabled` is true, otherwise `Info`.
/// - `RUST_LOG` overrides the defaults if explicitly set.
///
/// # Panics
/// Panics if a global logger has already been installed (standard
/// `env_logger` behavior); call it at most once per process.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}
