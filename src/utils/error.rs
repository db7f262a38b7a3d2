use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SetupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SetupError::IoError(_) | SetupError::FileWriteError { .. } => ErrorCategory::FileSystem,
            SetupError::HttpClientError(_) => ErrorCategory::Network,
            SetupError::TomlError(_)
            | SetupError::ConfigError { .. }
            | SetupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SetupError::TomlError(_)
            | SetupError::ConfigError { .. }
            | SetupError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SetupError::HttpClientError(_) => ErrorSeverity::Medium,
            SetupError::IoError(_) | SetupError::FileWriteError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failed run. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags and the TOML config file, then run again"
            }
            ErrorCategory::FileSystem => {
                "Make sure the output directory exists and is writable, then run again"
            }
            ErrorCategory::Network => "Check the service URL and your network settings",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SetupError::FileWriteError { path, .. } => format!("Could not write '{}'", path),
            SetupError::IoError(e) => format!("File system error: {}", e),
            SetupError::HttpClientError(_) => "Could not create the HTTP client".to_string(),
            SetupError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            SetupError::ConfigError { message } => message.clone(),
            SetupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_errors_are_critical_filesystem_errors() {
        let err = SetupError::FileWriteError {
            path: ".cursorrules".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.category(), ErrorCategory::FileSystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains(".cursorrules"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            SetupError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound)),
            SetupError::FileWriteError {
                path: "test_layouts/simple_form.vue".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
            SetupError::ConfigError {
                message: "Failed to read config file".to_string(),
            },
            SetupError::InvalidConfigValueError {
                field: "service.timeout_seconds".to_string(),
                value: "0".to_string(),
                reason: "Value must be between 1 and 60".to_string(),
            },
        ];
        for err in &errors {
            assert_ne!(err.exit_code(), 0, "{:?} would exit successfully", err);
        }
        assert_eq!(errors[1].exit_code(), 3);
        assert_eq!(errors[3].exit_code(), 1);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SetupError::InvalidConfigValueError {
            field: "service.url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid 'service.url': Unsupported URL scheme: ftp"
        );
    }
}
