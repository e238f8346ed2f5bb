//! GeoNames error types

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur while talking to the GeoNames web service
///
/// Each variant corresponds to one stage of a lookup. Nothing is retried, and
/// a failure at any stage discards the whole operation.
#[derive(Debug, Error)]
pub enum GeoNamesError {
    /// A caller-supplied argument was rejected before any request was made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Coordinates or other domain input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    /// Client configuration is unusable (empty username, bad header, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The base URL could not be combined with the endpoint name
    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The configured base URL
        url: String,
        /// Underlying parse failure
        source: url::ParseError,
    },

    /// Sending the request failed (connection, DNS, TLS or timeout)
    #[error("Sending GET request failed: {source}")]
    Transport {
        /// Underlying transport failure
        source: reqwest::Error,
    },

    /// The service answered with a status other than 200 OK
    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The response body could not be read
    #[error("Reading response body failed: {source}")]
    BodyRead {
        /// Underlying read failure
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape
    #[error("Decoding response body failed: {source}")]
    Decode {
        /// Underlying decode failure
        source: serde_json::Error,
    },

    /// The service reported an error inside a 200 response
    /// (invalid user, exhausted credits, ...)
    #[error("GeoNames service error {code}: {message}")]
    Service {
        /// GeoNames status code (e.g. 10 for an unknown or disabled account)
        code: i64,
        /// Message reported by the service
        message: String,
    },
}

impl GeoNamesError {
    /// HTTP status carried by this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the transport deadline elapsed
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } | Self::BodyRead { source } => source.is_timeout(),
            _ => false,
        }
    }

    /// Returns true if the error was raised locally, before any request was sent
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::InvalidInput(_)
                | Self::Configuration(_)
                | Self::InvalidBaseUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_status_only_for_unexpected_status() {
        assert_eq!(
            GeoNamesError::UnexpectedStatus { status: 503 }.status(),
            Some(503)
        );
        assert_eq!(
            GeoNamesError::InvalidArgument("x".to_string()).status(),
            None
        );
    }

    #[test]
    fn test_local_errors() {
        assert!(GeoNamesError::InvalidArgument("max_rows".to_string()).is_local());
        assert!(GeoNamesError::Configuration("username".to_string()).is_local());
        assert!(
            GeoNamesError::from(DomainError::InvalidCoordinates {
                lat: 100.0,
                lng: 0.0
            })
            .is_local()
        );
        assert!(!GeoNamesError::UnexpectedStatus { status: 500 }.is_local());
        assert!(
            !GeoNamesError::Service {
                code: 10,
                message: "disabled".to_string()
            }
            .is_local()
        );
    }

    #[test]
    fn test_invalid_base_url_keeps_source() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = GeoNamesError::InvalidBaseUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_decode_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GeoNamesError::Decode { source };
        assert!(err.source().is_some());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_error_display() {
        let err = GeoNamesError::UnexpectedStatus { status: 403 };
        assert_eq!(err.to_string(), "Unexpected HTTP status: 403");

        let err = GeoNamesError::Service {
            code: 18,
            message: "daily limit of credits exceeded".to_string(),
        };
        assert!(err.to_string().contains("18"));
        assert!(err.to_string().contains("daily limit"));
    }
}
