use crate::EnvironmentName;
use artify_env_vars::EnvSnapshot;
use std::{fmt::Display, str::FromStr};
use tracing::warn;

pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";

pub const DEFAULT_USERNAME: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_DATABASE: &str = "artify_db";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;

/// Appended to the database name of the test environment.
pub const TEST_DATABASE_SUFFIX: &str = "_test";

/// Resolve a single variable for `environment`.
///
/// Environments that apply defaults treat an unset, empty or unparsable
/// value as absent and fall back to `default`. Production takes the value
/// verbatim: unset stays `None`, an empty string stays empty, and an
/// unparsable value becomes `None`.
pub(crate) fn resolve<T>(
    env: &EnvSnapshot,
    var: &'static str,
    default: T,
    environment: EnvironmentName,
) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = if environment.applies_defaults() {
        env.non_empty(var)
    } else {
        env.get(var)
    };

    let parsed = raw.and_then(|value| match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(
                var,
                value,
                %environment,
                %err,
                "ignoring unparsable configuration variable"
            );
            None
        }
    });

    if environment.applies_defaults() {
        Some(parsed.unwrap_or(default))
    } else {
        parsed
    }
}

pub(crate) fn resolve_string(
    env: &EnvSnapshot,
    var: &'static str,
    default: &str,
    environment: EnvironmentName,
) -> Option<String> {
    resolve(env, var, default.to_owned(), environment)
}

/// The database name, with the test suffix applied after defaulting.
pub(crate) fn resolve_database(env: &EnvSnapshot, environment: EnvironmentName) -> Option<String> {
    let name = resolve_string(env, DB_NAME, DEFAULT_DATABASE, environment);
    match environment {
        EnvironmentName::Test => name.map(|name| format!("{name}{TEST_DATABASE_SUFFIX}")),
        _ => name,
    }
}
