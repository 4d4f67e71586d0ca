//! Error types produced by the listing crate.
//!
//! Only the top-level shape of a collection can fail. Individual field values
//! are coerced permissively and never surface as errors.

use thiserror::Error;

/// Errors that can occur while parsing a vehicle collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    /// The document is not valid JSON.
    #[error("vehicle data is not valid JSON: {0}")]
    Json(String),

    /// The document parsed, but its top-level value is not an array.
    #[error("vehicle data must be an array, found {0}")]
    NotAnArray(&'static str),
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        CollectionError::Json(err.to_string())
    }
}

/// Errors that can occur while loading the source collection.
///
/// A load error is terminal for the lifetime of the process: the catalog
/// never retries and renders the load-failure notice from then on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read vehicle data: {0}")]
    Io(String),

    #[error("vehicle data request returned status {0}")]
    Status(u16),

    #[error("vehicle data request failed: {0}")]
    Http(String),

    #[error("vehicle data is not valid JSON: {0}")]
    Json(String),

    #[error("vehicle data must be an array, found {0}")]
    NotAnArray(&'static str),
}

impl From<CollectionError> for LoadError {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::Json(msg) => LoadError::Json(msg),
            CollectionError::NotAnArray(kind) => LoadError::NotAnArray(kind),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_errors_keep_their_message() {
        let load: LoadError = CollectionError::NotAnArray("object").into();
        assert_eq!(load, LoadError::NotAnArray("object"));
        assert_eq!(load.to_string(), "vehicle data must be an array, found object");
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "vehicle data request returned status 404"
        );
    }
}
