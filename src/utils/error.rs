use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ViewerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewerError::FileAccess { .. } | ViewerError::Decode { .. } => ErrorCategory::Input,
            ViewerError::ConfigError { .. } | ViewerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ViewerError::ServerError(_) => ErrorCategory::Host,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ViewerError::ConfigError { .. } | ViewerError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            ViewerError::FileAccess { .. } | ViewerError::Decode { .. } => ErrorSeverity::High,
            ViewerError::ServerError(_) => ErrorSeverity::Critical,
        }
    }

    /// Exit code for the binary. Every failure is fatal, so this is never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ViewerError::FileAccess { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Could not find the HTML file '{}'", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading '{}'", path.display())
                }
                _ => format!("Could not read '{}': {}", path.display(), source),
            },
            ViewerError::Decode { path, source } => format!(
                "'{}' contains invalid UTF-8 at byte {}",
                path.display(),
                source.utf8_error().valid_up_to()
            ),
            ViewerError::ServerError(e) => format!("The viewer host failed: {}", e),
            ViewerError::ConfigError { message } => format!("Configuration problem: {}", message),
            ViewerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ViewerError::FileAccess { .. } => {
                "Run the viewer from the directory that contains index.html"
            }
            ViewerError::Decode { .. } => "Re-save the HTML file with UTF-8 encoding",
            ViewerError::ServerError(_) => {
                "Check that the bind address is free, or pick another with --bind"
            }
            ViewerError::ConfigError { .. } | ViewerError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
