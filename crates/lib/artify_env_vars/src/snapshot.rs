use std::collections::BTreeMap;
use tracing::trace;

/// An immutable copy of the process environment taken at one instant.
///
/// Configuration built from a snapshot is a pure function of it, so the same
/// snapshot always produces the same configuration, and tests can build one
/// from literal pairs instead of touching the real environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (Ok(key), Err(_)) => {
                    trace!("skipping non UTF-8 configuration variable {}", key);
                    None
                }
                (Err(_), _) => None,
            })
            .collect();

        Self { vars }
    }

    /// The raw value of `var`, including an empty string when it is set but empty.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.vars.get(var).map(String::as_str)
    }

    /// The value of `var`, treating an empty value like an unset one.
    pub fn non_empty(&self, var: &str) -> Option<&str> {
        self.get(var).filter(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
