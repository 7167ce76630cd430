use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Table not found on the page (locator: {locator})")]
    TableNotFound { locator: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
pub enum ErrorCategory {
    Network,
    Parse,
    Write,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::NetworkError(_) => ErrorCategory::Network,
            ScrapeError::TableNotFound { .. } => ErrorCategory::Parse,
            ScrapeError::IoError(_) | ScrapeError::SerializationError(_) => ErrorCategory::Write,
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Only configuration errors stop a run before it starts; everything else
    /// degrades to fewer or zero records.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Parse => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Write => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::NetworkError(e) => format!("Error fetching the webpage: {}", e),
            ScrapeError::TableNotFound { .. } => "Table not found on the page".to_string(),
            ScrapeError::IoError(e) => format!("Error saving to JSON: {}", e),
            ScrapeError::SerializationError(e) => format!("Error saving to JSON: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::NetworkError(e) if e.is_status() => {
                "The site answered with an error status; check the URL or try again later"
            }
            ScrapeError::NetworkError(_) => "Check your network connection and run again",
            ScrapeError::TableNotFound { .. } => {
                "The page layout may have changed; inspect the page or pass --table-id"
            }
            ScrapeError::IoError(_) => "Check that the output directory is writable",
            ScrapeError::SerializationError(_) => "Re-run with --verbose and report the records",
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
