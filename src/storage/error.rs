//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the key-value file.
///
/// These never reach the screen: the store logs them and carries on with
/// whatever it has in memory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read the storage file
    #[error("Failed to read storage from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the storage file
    #[error("Failed to write storage to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The storage file is not a JSON object of strings
    #[error("Storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to encode the whole store for writing
    #[error("Failed to encode storage for {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize a value
    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    /// Failed to deserialize a stored value
    #[error("Failed to deserialize '{key}': {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Write {
            path: PathBuf::from("/tmp/storage.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/tmp/storage.json"));
        assert!(error.to_string().contains("denied"));

        let source = serde_json::from_str::<Vec<String>>("nope").unwrap_err();
        let error = StorageError::Deserialize {
            key: "motivations".to_string(),
            source,
        };
        assert!(error.to_string().contains("motivations"));
    }

    #[test]
    fn file_errors_name_the_path() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let error = StorageError::Corrupt {
            path: PathBuf::from("/tmp/storage.json"),
            source,
        };
        assert!(error.to_string().contains("Storage file /tmp/storage.json is corrupt"));
    }
}
