use crate::LogFormat;
use artify_config::AppConfig;
use artify_env_vars::maybe_env;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, filter::Directive};

#[derive(Debug)]
pub struct Config {
    pub format: LogFormat,
    pub filter: EnvFilter,
}

impl Config {
    fn filter_from_env(default_directive: &str) -> anyhow::Result<EnvFilter> {
        Ok(EnvFilter::builder()
            .with_default_directive(Directive::from_str(default_directive)?)
            .with_env_var("ARTIFY_LOG")
            .from_env_lossy())
    }
}

impl AppConfig for Config {
    fn from_environment() -> anyhow::Result<Self> {
        Ok(Self {
            format: maybe_env("ARTIFY_LOG_FORMAT")?.unwrap_or_default(),
            filter: Self::filter_from_env("info")?,
        })
    }

    #[cfg(any(test, feature = "testing"))]
    fn test_config() -> anyhow::Result<Self> {
        Ok(Self {
            format: LogFormat::Pretty,
            filter: Self::filter_from_env("trace")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uses_pretty_output() -> anyhow::Result<()> {
        let config = Config::test_config()?;
        assert_eq!(config.format, LogFormat::Pretty);
        Ok(())
    }
}
