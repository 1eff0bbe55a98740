use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid query parameter '{parameter}': {reason}")]
    InvalidQuery { parameter: String, reason: String },

    #[error("Product not found")]
    ProductNotFound { product_id: i64 },

    #[error("Pincode not found")]
    PincodeNotFound { pincode: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Validation,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::SerializationError(_) | CatalogError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::ValidationError { .. } | CatalogError::InvalidQuery { .. } => {
                ErrorCategory::Validation
            }
            CatalogError::ProductNotFound { .. } | CatalogError::PincodeNotFound { .. } => {
                ErrorCategory::NotFound
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// True for errors a client caused (bad ids, bad query strings).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::NotFound | ErrorCategory::Validation
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::SerializationError(_) => {
                "Make sure the file contains valid JSON in the expected shape"
            }
            CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            CatalogError::ProcessingError { .. } => {
                "The input document needs a top-level \"products\" array of objects"
            }
            CatalogError::ValidationError { .. } | CatalogError::InvalidQuery { .. } => {
                "page and limit must be positive integers; in_stock accepts true/false, 1/0, yes/no or on/off"
            }
            CatalogError::ProductNotFound { .. } => "List products to find a valid product_id",
            CatalogError::PincodeNotFound { .. } => "This pincode is not serviced",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not access a file: {}", e),
            CatalogError::SerializationError(e) => format!("The data is not valid JSON: {}", e),
            CatalogError::ProductNotFound { product_id } => {
                format!("Product {} does not exist", product_id)
            }
            CatalogError::PincodeNotFound { pincode } => {
                format!("No delivery information for pincode {}", pincode)
            }
            other => other.to_string(),
        }
    }

    /// Process exit code for the command line tools.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_low_severity_client_error() {
        let err = CatalogError::ProductNotFound { product_id: 42 };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Product not found");
        assert!(err.user_friendly_message().contains("42"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: CatalogError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "data.json").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 3);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_query_message() {
        let err = CatalogError::InvalidQuery {
            parameter: "page".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid query parameter 'page': must be greater than 0"
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
