use anyhow::Result;

/// The main config trait for an application or library config.
///
/// Implemented by the database and logging configs, and consumed by the CLI.
pub trait AppConfig: Sized {
    fn from_environment() -> Result<Self>;

    #[cfg(feature = "testing")]
    fn test_config() -> Result<Self> {
        Self::from_environment()
    }
}
