/// Error types for the Deep Dive panel
use thiserror::Error;

/// Everything that can go wrong while fetching a widget's data.
///
/// The panel never shows these to the user individually: every variant
/// collapses into the same "Error loading data" widget state.
#[derive(Error, Debug)]
pub enum DeepDiveError {
    /// Transport rejected the request (offline, CORS, DNS, ...)
    #[error("Request failed: {0}")]
    NetworkFailure(String),

    /// The server answered with a non-2xx status
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },

    /// Body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl DeepDiveError {
    /// True for transport failures and non-2xx responses.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            DeepDiveError::NetworkFailure(_) | DeepDiveError::HttpStatus { .. }
        )
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for DeepDiveError {
    fn from(e: reqwest::Error) -> Self {
        DeepDiveError::NetworkFailure(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeepDiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_counts_as_network_failure() {
        let err = DeepDiveError::HttpStatus {
            status: 502,
            url: "/api/low_stock".to_string(),
        };
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Request to /api/low_stock returned HTTP 502");
    }

    #[test]
    fn decode_error_is_malformed() {
        let decode = serde_json::from_str::<Vec<u32>>("<html>").unwrap_err();
        let err: DeepDiveError = decode.into();
        assert!(!err.is_network());
        assert!(err.to_string().starts_with("Malformed response"));
    }
}
