use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether SQL statements issued by the database driver are logged.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoggingPolicy {
    Verbose,
    #[default]
    Silent,
}

impl LoggingPolicy {
    /// Level at which the driver emits executed statements under the
    /// `sqlx::query` target.
    pub fn statement_level(self) -> log::LevelFilter {
        match self {
            LoggingPolicy::Verbose => log::LevelFilter::Info,
            LoggingPolicy::Silent => log::LevelFilter::Off,
        }
    }

    pub fn is_verbose(self) -> bool {
        self == LoggingPolicy::Verbose
    }
}
