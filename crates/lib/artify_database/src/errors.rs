#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("production configuration variable {var} is unset, empty or invalid")]
    MissingProductionCredential { var: &'static str },

    #[error("database configuration is incomplete, missing {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}
