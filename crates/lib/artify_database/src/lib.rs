//! Database connection settings for every deployment environment.
//!
//! [`DatabaseConfig`] is built once from an [`EnvSnapshot`] and holds one
//! [`ConnectionSettings`] record per [`EnvironmentName`]. Which record is
//! active is decided by the caller. Non-production records always carry
//! usable defaults; production values are taken verbatim and only checked
//! when a connection is configured from them, or eagerly through
//! [`ConnectionSettings::validate`].
//!
//! [`EnvSnapshot`]: artify_env_vars::EnvSnapshot

mod config;
mod environment;
mod errors;
mod resolve;
mod settings;

pub use config::DatabaseConfig;
pub use environment::{EnvironmentName, InvalidEnvironmentName};
pub use errors::ConfigError;
pub use resolve::{
    DB_HOST, DB_NAME, DB_PASSWORD, DB_PORT, DB_USERNAME, DEFAULT_DATABASE, DEFAULT_HOST,
    DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USERNAME, TEST_DATABASE_SUFFIX,
};
pub use settings::{ConnectionSettings, Dialect, TlsOptions};

pub use artify_logging::LoggingPolicy;
