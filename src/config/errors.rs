//! Structured configuration errors.

use std::fmt;

use serde::Serialize;

/// Stable, machine-readable error codes for configuration diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A numeric setting lies outside its accepted range
    OutOfRange,
    /// A stopword language has no bundled list
    UnknownLanguage,
    /// A field the schema does not recognize
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configuration problem: code, JSON pointer, message and an optional
/// fix-it hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_hint() {
        let err = ConfigError::new(ErrorCode::OutOfRange, "/sentences", "must be at least 1")
            .with_hint("Set sentences to 1 or more");

        assert_eq!(
            err.to_string(),
            "[out_of_range] /sentences: must be at least 1 (Set sentences to 1 or more)"
        );
    }

    #[test]
    fn test_serialize_skips_missing_hint() {
        let err = ConfigError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}
