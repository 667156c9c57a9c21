use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Not a valid date: '{value}'.")]
    DateFormatError { value: String },

    #[error("Date out of range: '{date}' shifted by {ndays} days")]
    DateOutOfRange { date: String, ndays: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl UtilsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UtilsError::DateFormatError { .. } | UtilsError::DateOutOfRange { .. } => {
                ErrorSeverity::High
            }
            UtilsError::ConfigError { .. }
            | UtilsError::InvalidConfigValueError { .. }
            | UtilsError::TomlError(_) => ErrorSeverity::Medium,
            UtilsError::IoError(_) | UtilsError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilsError::DateFormatError { value } => {
                format!("'{}' is not a date in YYYY-MM-DD form", value)
            }
            UtilsError::DateOutOfRange { date, ndays } => {
                format!("Cannot shift {} by {} days", date, ndays)
            }
            UtilsError::IoError(e) => format!("Could not read a file: {}", e),
            UtilsError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            UtilsError::SerializationError(e) => format!("Could not render output: {}", e),
            UtilsError::ConfigError { message } => format!("Configuration problem: {}", message),
            UtilsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UtilsError::DateFormatError { .. } => "Pass the date as YYYY-MM-DD, e.g. 2017-11-10",
            UtilsError::DateOutOfRange { .. } => "Use a smaller day count",
            UtilsError::IoError(_) => "Check that the config file exists and is readable",
            UtilsError::TomlError(_) => "Fix the TOML syntax in the config file",
            UtilsError::SerializationError(_) => "Retry without --json",
            UtilsError::ConfigError { .. } | UtilsError::InvalidConfigValueError { .. } => {
                "Review the [output] and [logging] sections of the config file"
            }
        }
    }

    /// 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_error_message() {
        let err = UtilsError::DateFormatError {
            value: "345".to_string(),
        };
        assert_eq!(err.to_string(), "Not a valid date: '345'.");
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = UtilsError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("output.format"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: UtilsError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
