use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobCloudError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JobCloudError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JobCloudError::ApiError(_) => ErrorCategory::Network,
            JobCloudError::IoError(_) => ErrorCategory::Io,
            JobCloudError::SerializationError(_) => ErrorCategory::Data,
            JobCloudError::ProcessingError { .. } => ErrorCategory::Data,
            JobCloudError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            JobCloudError::ApiError(_) => ErrorSeverity::Medium,
            JobCloudError::IoError(_) => ErrorSeverity::High,
            JobCloudError::SerializationError(_) => ErrorSeverity::Medium,
            JobCloudError::ProcessingError { .. } => ErrorSeverity::High,
            JobCloudError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JobCloudError::ApiError(_) => {
                "Check your network connection and the search API endpoint, then rerun"
            }
            JobCloudError::IoError(_) => {
                "Check that the city list exists and the output location is writable"
            }
            JobCloudError::SerializationError(_) => {
                "The search service returned an unexpected payload; verify the endpoint and publisher id"
            }
            JobCloudError::ProcessingError { .. } => {
                "Inspect the input data; rerun with --verbose for details"
            }
            JobCloudError::InvalidConfigValueError { .. } => {
                "Fix the offending flag value and rerun"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JobCloudError::ApiError(e) => {
                format!("Could not reach the job search service: {}", e)
            }
            JobCloudError::IoError(e) => format!("File operation failed: {}", e),
            JobCloudError::SerializationError(e) => {
                format!("Could not understand the search service response: {}", e)
            }
            JobCloudError::ProcessingError { message } => message.clone(),
            JobCloudError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("Configuration value '{}' is invalid for {}: {}", value, field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JobCloudError>;
