mod config;
mod log_format;
mod policy;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::Config;
pub use log_format::LogFormat;
pub use policy::LoggingPolicy;

use anyhow::Context as _;
use artify_config::AppConfig as _;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt as _};

/// Install the global tracing subscriber.
///
/// Records emitted through the `log` facade are bridged into tracing.
pub fn init() -> anyhow::Result<()> {
    init_with(Config::from_environment()?)
}

pub fn init_with(config: Config) -> anyhow::Result<()> {
    let log_formatter = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(log_formatter)
        .with(config.filter)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(())
}
