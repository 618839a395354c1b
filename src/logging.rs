use tracing_subscriber::EnvFilter;

// the library and the binary share this target
const CRATE_TARGETS: &[&str] = &["chronicle_timeline"];

/// Installs the stderr subscriber for the chronicle CLI.
///
/// Without `-v` only warnings show. `-v` adds the per-run timeline summary,
/// `-vv` every recognized year, month and day label, `-vvv` everything else.
/// A set `RUST_LOG` wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
