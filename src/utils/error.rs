use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{what} not found")]
    NotFound { what: &'static str },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error for {field}: {reason}")]
    ConfigError { field: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidFieldError { field: String, reason: String },

    #[error("Submission failed: {message}")]
    SubmissionError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// Message shown to a visitor when a page-level operation fails.
    pub fn user_facing_message(&self) -> String {
        match self {
            SiteError::SubmissionError { .. } => {
                "Failed to send message. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_renders_fixed_message() {
        let err = SiteError::NotFound { what: "Service" };
        assert_eq!(err.to_string(), "Service not found");

        let err = SiteError::NotFound { what: "Workshop" };
        assert_eq!(err.to_string(), "Workshop not found");
    }
}
