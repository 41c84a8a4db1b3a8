use thiserror::Error;

/// An address could not be resolved to coordinates.
///
/// Every variant means the same thing to the caller: the stop stays
/// unresolved. The variants only exist for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    /// Blank address text; no request is made.
    #[error("address is empty")]
    EmptyAddress,

    /// The provider answered with zero results.
    #[error("no results for '{query}'")]
    NotFound { query: String },

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// No answer within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection or protocol failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be interpreted.
    #[error("unexpected provider response: {0}")]
    Malformed(String),
}

impl GeocodeError {
    /// Returns `true` for the timeout variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = GeocodeError::NotFound {
            query: "Rua X, Sao Paulo".into(),
        };
        assert_eq!(e.to_string(), "no results for 'Rua X, Sao Paulo'");
        assert_eq!(
            GeocodeError::Status { status: 503 }.to_string(),
            "provider returned HTTP 503"
        );
    }

    #[test]
    fn test_is_timeout() {
        assert!(GeocodeError::Timeout.is_timeout());
        assert!(!GeocodeError::EmptyAddress.is_timeout());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u8>>("{").expect_err("invalid json");
        assert!(matches!(GeocodeError::from(err), GeocodeError::Malformed(_)));
    }
}
