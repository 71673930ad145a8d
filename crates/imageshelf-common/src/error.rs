//! Common error types used throughout imageshelf.
//!
//! Storage, decoding, and remote-edit failures share one enum so that a
//! caller driving the whole save → edit → re-save flow handles a single type.

/// Common error type for imageshelf.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The storage engine rejected the open request.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The payload is not a decodable raster image (or data URI).
    #[error("Decode error: {0}")]
    Decode(String),

    /// A record with the same primary key already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Reading image bytes failed.
    #[error("Read error: {0}")]
    Read(String),

    /// The remote service answered with a non-success status.
    #[error("Remote error: HTTP {status}: {body}")]
    Remote {
        status: u16,
        body: serde_json::Value,
    },

    /// The remote service answered successfully but returned no image.
    #[error("No image found in response")]
    NoImageInResponse,

    /// Remote calls are refused in the current deployment environment.
    #[error("Environment restricted: {0}")]
    EnvironmentRestricted(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new StorageUnavailable error.
    pub fn storage_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::StorageUnavailable(msg.into())
    }

    /// Create a new Decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new Read error.
    pub fn read<S: Into<String>>(msg: S) -> Self {
        Self::Read(msg.into())
    }

    /// Create a new Remote error.
    pub fn remote(status: u16, body: serde_json::Value) -> Self {
        Self::Remote { status, body }
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status carried by a [`Error::Remote`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::storage_unavailable("unable to open database file");
        assert_eq!(
            err.to_string(),
            "Storage unavailable: unable to open database file"
        );

        let err = Error::decode("bad header");
        assert_eq!(err.to_string(), "Decode error: bad header");

        let err = Error::DuplicateKey("img_1".into());
        assert_eq!(err.to_string(), "Duplicate key: img_1");

        let err = Error::NoImageInResponse;
        assert_eq!(err.to_string(), "No image found in response");
    }

    #[test]
    fn test_remote_error_carries_status_and_body() {
        let err = Error::remote(401, serde_json::json!({"code": "InvalidApiKey"}));
        assert_eq!(err.status(), Some(401));
        assert_eq!(
            err.to_string(),
            r#"Remote error: HTTP 401: {"code":"InvalidApiKey"}"#
        );
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        assert_eq!(Error::read("eof").status(), None);
        assert_eq!(Error::NoImageInResponse.status(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::database("x"), Error::Database(_)));
        assert!(matches!(Error::invalid_input("x"), Error::InvalidInput(_)));
        assert!(matches!(Error::internal("x"), Error::Internal(_)));
        assert!(matches!(Error::read("x"), Error::Read(_)));
    }
}
