use thiserror::Error;

/// Top-level error type for the Scout system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ScoutError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Conversation error: {0}")]
    Conversation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ScoutError {
    fn from(err: toml::de::Error) -> Self {
        ScoutError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ScoutError {
    fn from(err: toml::ser::Error) -> Self {
        ScoutError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScoutError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = ScoutError::Catalog("events file unreadable".to_string());
        assert_eq!(err.to_string(), "Catalog error: events file unreadable");

        let err = ScoutError::Conversation("turn rejected".to_string());
        assert_eq!(err.to_string(), "Conversation error: turn rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScoutError = io_err.into();
        assert!(matches!(err, ScoutError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: ScoutError = parsed.unwrap_err().into();
        assert!(matches!(err, ScoutError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(parsed.is_err());
        let err: ScoutError = parsed.unwrap_err().into();
        assert!(matches!(err, ScoutError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }
}
