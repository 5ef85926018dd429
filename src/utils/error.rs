use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("No async runtime available to schedule the task")]
    RuntimeUnavailable,

    #[error("Scheduled task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UtilsError::InvalidArgument { .. } => ErrorSeverity::Medium,
            UtilsError::SerializationError(_)
            | UtilsError::ConfigValidationError { .. }
            | UtilsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            UtilsError::IoError(_) => ErrorSeverity::High,
            UtilsError::RuntimeUnavailable | UtilsError::TaskFailed(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UtilsError::InvalidArgument { .. } => "Check the input value and try again",
            UtilsError::RuntimeUnavailable => "Call the operation from within a tokio runtime",
            UtilsError::TaskFailed(_) => "The background task panicked; rerun with --verbose",
            UtilsError::IoError(_) => "Check that the file exists and is readable",
            UtilsError::SerializationError(_) => "Check that the JSON argument is well formed",
            UtilsError::ConfigValidationError { .. }
            | UtilsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilsError::InvalidArgument { message } => format!("Invalid input: {}", message),
            UtilsError::SerializationError(e) => format!("Could not parse input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_message_verbatim() {
        let err = UtilsError::invalid_argument("Negative number not allowed");
        assert_eq!(err.to_string(), "Negative number not allowed");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = UtilsError::InvalidConfigValueError {
            field: "square.delay_ms".to_string(),
            value: "99999999".to_string(),
            reason: "too large".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("square.delay_ms"));
    }
}
