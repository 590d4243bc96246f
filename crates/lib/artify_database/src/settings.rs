use crate::{
    ConfigError, EnvironmentName,
    resolve::{
        DB_HOST, DB_PASSWORD, DB_PORT, DB_USERNAME, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT,
        DEFAULT_USERNAME, resolve, resolve_database, resolve_string,
    },
};
use artify_env_vars::EnvSnapshot;
use artify_logging::LoggingPolicy;
use serde::{Deserialize, Serialize};
use sqlx::{
    ConnectOptions as _,
    postgres::{PgConnectOptions, PgSslMode},
};
use std::fmt;
use strum::{Display, EnumString};

const REDACTED: &str = "********";

/// The database engine family. The same in every environment.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Dialect {
    #[default]
    Postgres,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsOptions {
    pub require: bool,
    pub reject_unauthorized: bool,
}

impl TlsOptions {
    /// TLS is mandatory, but self-signed or otherwise unverifiable server
    /// certificates are accepted.
    pub const REQUIRED_UNVERIFIED: TlsOptions = TlsOptions {
        require: true,
        reject_unauthorized: false,
    };
}

/// Connection parameters for one deployment environment.
///
/// `None` only ever appears in production, where nothing is defaulted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dialect: Dialect,
    pub logging: LoggingPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsOptions>,
}

impl ConnectionSettings {
    pub(crate) fn resolve(env: &EnvSnapshot, environment: EnvironmentName) -> Self {
        Self {
            username: resolve_string(env, DB_USERNAME, DEFAULT_USERNAME, environment),
            password: resolve_string(env, DB_PASSWORD, DEFAULT_PASSWORD, environment),
            database: resolve_database(env, environment),
            host: resolve_string(env, DB_HOST, DEFAULT_HOST, environment),
            port: resolve(env, DB_PORT, DEFAULT_PORT, environment),
            dialect: Dialect::Postgres,
            logging: match environment {
                EnvironmentName::Development => LoggingPolicy::Verbose,
                EnvironmentName::Test | EnvironmentName::Production => LoggingPolicy::Silent,
            },
            tls: match environment {
                EnvironmentName::Production => Some(TlsOptions::REQUIRED_UNVERIFIED),
                EnvironmentName::Development | EnvironmentName::Test => None,
            },
        }
    }

    /// Variables whose value is unset or empty, in declaration order.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        fn is_blank(value: &Option<String>) -> bool {
            value.as_deref().is_none_or(str::is_empty)
        }

        let mut missing = Vec::new();
        if is_blank(&self.username) {
            missing.push(DB_USERNAME);
        }
        if is_blank(&self.password) {
            missing.push(DB_PASSWORD);
        }
        if is_blank(&self.database) {
            missing.push(crate::DB_NAME);
        }
        if is_blank(&self.host) {
            missing.push(DB_HOST);
        }
        if self.port.is_none() {
            missing.push(DB_PORT);
        }
        missing
    }

    /// Check eagerly that every field carries a value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_variables();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Incomplete { missing })
        }
    }

    pub fn ssl_mode(&self) -> PgSslMode {
        match self.tls {
            Some(TlsOptions {
                require: true,
                reject_unauthorized: false,
            }) => PgSslMode::Require,
            Some(TlsOptions {
                require: true,
                reject_unauthorized: true,
            }) => PgSslMode::VerifyFull,
            Some(TlsOptions { require: false, .. }) | None => PgSslMode::Prefer,
        }
    }

    /// Driver options for opening a connection with these settings.
    ///
    /// Fails with [`ConfigError::MissingProductionCredential`] naming the
    /// first unset variable.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(var) = self.missing_variables().into_iter().next() {
            return Err(ConfigError::MissingProductionCredential { var });
        }

        let options = PgConnectOptions::new_without_pgpass()
            .host(self.host.as_deref().unwrap_or_default())
            .port(self.port.unwrap_or(DEFAULT_PORT))
            .username(self.username.as_deref().unwrap_or_default())
            .password(self.password.as_deref().unwrap_or_default())
            .database(self.database.as_deref().unwrap_or_default())
            .ssl_mode(self.ssl_mode());

        Ok(if self.logging.is_verbose() {
            options.log_statements(self.logging.statement_level())
        } else {
            options.disable_statement_logging()
        })
    }

    /// A copy safe to print, with the password masked.
    pub fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| REDACTED.to_owned()),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("database", &self.database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dialect", &self.dialect)
            .field("logging", &self.logging)
            .field("tls", &self.tls)
            .finish()
    }
}
