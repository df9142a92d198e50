use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "TRAVEL_PATHS_LOG";

/// Installs a stderr subscriber. `TRAVEL_PATHS_LOG` (or `RUST_LOG`) overrides
/// the level chosen by `verbose`.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "travel_paths=debug"
    } else {
        "travel_paths=warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
