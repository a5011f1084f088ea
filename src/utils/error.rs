use thiserror::Error;

#[derive(Error, Debug)]
pub enum TierError {
    #[error("Level {level} is outside the supported range 1-999")]
    InvalidLevel { level: i64 },

    #[error("Invalid tier table: {reason}")]
    InvalidTable { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TierError::InvalidLevel { .. } => ErrorCategory::Input,
            TierError::InvalidTable { .. }
            | TierError::ConfigValidationError { .. }
            | TierError::InvalidConfigValueError { .. }
            | TierError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TierError::IoError(_) | TierError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TierError::InvalidLevel { .. } => {
                "Pass a level between 1 and 999, or use --allow-fallback to resolve to the lowest tier".to_string()
            }
            TierError::InvalidTable { .. } => {
                "Tiers must be listed highest first, cover levels 1-999 without gaps, and bill more per minute as they go up".to_string()
            }
            TierError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the tier file".to_string()
            }
            TierError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            TierError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            TierError::IoError(_) => "Make sure the file exists and is readable".to_string(),
            TierError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TierError::InvalidLevel { level } => format!("Level {} is not a valid expert level", level),
            TierError::InvalidTable { reason } => format!("The tier table is not usable: {}", reason),
            TierError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_input_error() {
        let err = TierError::InvalidLevel { level: 1200 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("1200"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: TierError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = TierError::InvalidTable {
            reason: "gap".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(TierError::InvalidLevel { level: 0 }.exit_code(), 1);
    }
}
