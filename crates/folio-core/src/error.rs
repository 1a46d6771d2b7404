//! Error types for Folio
//!
//! Page behavior itself never fails: bad preferences and bad project data
//! degrade to defaults. These variants cover the plumbing underneath, where a
//! feature cannot be installed at all.

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// A required page element was not found
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A browser API call was rejected
    #[error("DOM error: {0}")]
    Dom(String),

    /// Page configuration could not be read
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Preference storage rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::MissingElement("#modal".to_string());
        assert_eq!(format!("{}", err), "Missing element: #modal");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
