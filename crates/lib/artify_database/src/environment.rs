use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A deployment environment.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive, parse_err_ty = InvalidEnvironmentName, parse_err_fn = InvalidEnvironmentName::new)]
pub enum EnvironmentName {
    #[default]
    Development,
    Test,
    Production,
}

impl EnvironmentName {
    /// Whether unset variables fall back to built-in defaults.
    ///
    /// Production never defaults, so a missing credential fails the
    /// connection instead of silently pointing at a local database.
    pub fn applies_defaults(self) -> bool {
        !matches!(self, EnvironmentName::Production)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnvironmentName(String);

impl InvalidEnvironmentName {
    fn new(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Display for InvalidEnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid environment name: {} (expected development, test or production)",
            self.0
        )
    }
}

impl std::error::Error for InvalidEnvironmentName {}
