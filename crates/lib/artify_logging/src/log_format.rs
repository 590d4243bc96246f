use strum::{Display, EnumString};

/// Output format of the fmt layer, read from `ARTIFY_LOG_FORMAT`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}
