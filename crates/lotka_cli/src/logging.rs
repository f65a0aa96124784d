//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The core emits equilibrium and stability reports as `info` events and
//! pipeline stages as `debug` events. `RUST_LOG` takes precedence over the
//! verbosity flags when it is set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
