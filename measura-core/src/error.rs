//! Error types
//!
//! Two families live here. `ConfigError` is a declaration bug found while
//! the conversion tables are materialized and aborts startup. `MeasuraError`
//! is the structured value handed back to clients when a request cannot be
//! served.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_METHOD: &str = "UNKNOWN_METHOD";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const UNKNOWN_CONVERSION: &str = "UNKNOWN_CONVERSION";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Fault in the static conversion declarations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("'factor' argument is too small: |{factor}| < {epsilon}")]
    FactorTooSmall { factor: f64, epsilon: f64 },

    #[error("no conversion declared between primary '{primary}' and minor '{minor}'")]
    UndeclaredPair {
        primary: &'static str,
        minor: &'static str,
    },
}

/// Structured error for clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuraError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl MeasuraError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn unknown_method() -> Self {
        Self::new(codes::UNKNOWN_METHOD, "Unknown method or command used!")
            .with_suggestion("Use GET /convert or GET /units")
    }

    pub fn invalid_value(raw: &str) -> Self {
        Self::new(codes::INVALID_VALUE, "Invalid value!")
            .with_suggestion(format!("'{}' is not a number", raw))
    }

    pub fn unknown_conversion(from: &str, to: &str) -> Self {
        Self::new(codes::UNKNOWN_CONVERSION, "Unknown conversion type!")
            .with_suggestion(format!(
                "No conversion from '{}' to '{}'. Use GET /units to list signatures.",
                from, to
            ))
    }

    pub fn config(details: impl Into<String>) -> Self {
        Self::new(codes::CONFIG_ERROR, format!("Configuration error: {}", details.into()))
            .with_suggestion("This is a bug in the unit declarations, please report it")
    }
}

impl std::fmt::Display for MeasuraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasuraError {}

impl From<ConfigError> for MeasuraError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FactorTooSmall { factor: 0.0, epsilon: 1e-10 };
        assert!(err.to_string().contains("too small"));

        let err = ConfigError::UndeclaredPair { primary: "g", minor: "v" };
        assert_eq!(
            err.to_string(),
            "no conversion declared between primary 'g' and minor 'v'"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: MeasuraError = ConfigError::UndeclaredPair { primary: "m", minor: "lb" }.into();
        assert_eq!(err.code, codes::CONFIG_ERROR);
        assert!(err.message.contains("'m'"));
    }

    #[test]
    fn test_display_with_suggestion() {
        let err = MeasuraError::unknown_conversion("g", "m");
        let s = err.to_string();
        assert!(s.starts_with("[UNKNOWN_CONVERSION] Unknown conversion type!"));
        assert!(s.contains("from 'g' to 'm'"));
    }

    #[test]
    fn test_serialize_skips_missing_suggestion() {
        let err = MeasuraError::new(codes::INVALID_VALUE, "Invalid value!");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_VALUE","message":"Invalid value!"}"#);
    }
}
