//! Fetch-specific error types.

/// Errors that can occur while fetching weather or advice.
///
/// Every variant ends up on screen through the same error panel, so the
/// `Display` text is what the user reads.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// The body was not the JSON shape we expected.
    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be handed to the network worker.
    #[error("Network worker unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    /// Return the HTTP status for status failures.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_status_display() {
        let error = FetchError::Status {
            url: "http://localhost/current.json".to_string(),
            status: 404,
            message: "No matching location found.".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("No matching location found."));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_fetch_error_parse_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FetchError::Parse {
            url: "http://localhost/advice".to_string(),
            source,
        };
        assert!(error.to_string().contains("Failed to parse response"));
        assert!(error.to_string().contains("/advice"));
        assert_eq!(error.status(), None);
    }
}
