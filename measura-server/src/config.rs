//! Server configuration from the environment

use tracing::warn;

/// Fractional digits in rendered results, as C's `%f` prints them
pub const DEFAULT_PRECISION: usize = 6;

const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Fractional digits written in the `result` string
    pub precision: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl ServerConfig {
    /// Read `MEASURA_PRECISION`, falling back to defaults on bad input
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("MEASURA_PRECISION") {
            match raw.trim().parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => config.precision = p,
                _ => warn!(
                    value = %raw,
                    default = DEFAULT_PRECISION,
                    "ignoring invalid MEASURA_PRECISION"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.precision, 6);
    }

    #[test]
    fn test_precision_override() {
        let config =
            ServerConfig::from_lookup(|k| (k == "MEASURA_PRECISION").then(|| "3".to_string()));
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_invalid_precision_falls_back() {
        for bad in ["abc", "-1", "99", ""] {
            let config = ServerConfig::from_lookup(|_| Some(bad.to_string()));
            assert_eq!(config, ServerConfig::default(), "input {:?}", bad);
        }
    }
}
