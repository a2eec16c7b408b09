use tracing_subscriber::EnvFilter;

/// Sets up diagnostics on stderr; stdout is left to the `Running:` line.
///
/// Only warnings show by default. With `debug` set the level drops to `debug`
/// and `RUST_LOG` may override it.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    }
    else {
        EnvFilter::new("warn")
    };

    // A subscriber may already be installed (tests); that's fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
