// crates/dos2unix-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr so stdout stays clean for converted data.
///
/// `-q` pins the filter to errors; otherwise `RUST_LOG` wins over the
/// `-v`/default choice.
pub fn init(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("info")
            }
        })
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
