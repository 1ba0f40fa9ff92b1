use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Console logging: warnings and errors to stderr, everything else to stdout.
///
/// `verbose` lowers the default level to debug; `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info,focus_prompt=debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(false)
        .init();
}
