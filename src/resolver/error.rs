use std::path::PathBuf;

/// Errors that can occur while resolving the column list
///
/// All variants are terminal for the invocation: nothing is retried and no
/// partial list is returned.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// Transport-level failure or non-success HTTP status from the
    /// metadata service
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// Response body was not a JSON object of column descriptors, or a
    /// descriptor lacks the `name` field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Reference table could not be opened
    #[error("Cannot open reference table {path:?}: {source}")]
    FileNotFound {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Requested header name is absent from the reference table
    #[error("Field not found in reference table header: {0}")]
    FieldNotFound(String),

    /// TSV parsing error while streaming the reference table
    #[error("Reference table parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A field override pair was not of the form `key=value`
    #[error("Invalid field override (expected key=value): {0}")]
    InvalidFieldOverride(String),

    /// Backend kind is not one of the supported database types
    #[error("Unsupported backend kind: {0}")]
    UnsupportedBackend(String),
}
