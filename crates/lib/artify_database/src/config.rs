use crate::{ConnectionSettings, EnvironmentName};
use artify_config::AppConfig;
use artify_env_vars::EnvSnapshot;
use serde::Serialize;
use strum::IntoEnumIterator as _;
use tracing::debug;

/// Connection settings for every deployment environment.
///
/// Built once at startup and shared by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    development: ConnectionSettings,
    test: ConnectionSettings,
    production: ConnectionSettings,
}

impl DatabaseConfig {
    pub fn from_snapshot(env: &EnvSnapshot) -> Self {
        let config = Self {
            development: ConnectionSettings::resolve(env, EnvironmentName::Development),
            test: ConnectionSettings::resolve(env, EnvironmentName::Test),
            production: ConnectionSettings::resolve(env, EnvironmentName::Production),
        };
        debug!(?config, "resolved database configuration");
        config
    }

    pub fn get(&self, environment: EnvironmentName) -> &ConnectionSettings {
        match environment {
            EnvironmentName::Development => &self.development,
            EnvironmentName::Test => &self.test,
            EnvironmentName::Production => &self.production,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnvironmentName, &ConnectionSettings)> {
        EnvironmentName::iter().map(|environment| (environment, self.get(environment)))
    }

    pub fn redacted(&self) -> Self {
        Self {
            development: self.development.redacted(),
            test: self.test.redacted(),
            production: self.production.redacted(),
        }
    }
}

impl AppConfig for DatabaseConfig {
    fn from_environment() -> anyhow::Result<Self> {
        Ok(Self::from_snapshot(&EnvSnapshot::capture()))
    }

    #[cfg(any(test, feature = "testing"))]
    fn test_config() -> anyhow::Result<Self> {
        Ok(Self::from_snapshot(&EnvSnapshot::default()))
    }
}
