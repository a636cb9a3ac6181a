//! Error types for the Leo admin client

use std::{error::Error as StdError, fmt};

/// Main error type for the Leo admin client
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Authentication error (missing, expired, or rejected credentials)
    Authentication(String),

    /// Transport-level HTTP error (connection, DNS, timeout)
    Http(String),

    /// Error response from the backend API
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// The named field is not mutable on this resource
    UnknownField {
        /// Resource the mutation targeted
        resource: String,
        /// Field name that was rejected
        field: String,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Authentication(msg) => write!(f, "Authentication failed: {msg}"),
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::Api { status, message } => {
                write!(f, "API error ({status}): {message}")
            }
            Self::UnknownField { resource, field } => {
                write!(f, "Field {field} is not mutable on {resource}")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// Whether the error is an expired/rejected credential that a token
    /// refresh may recover from
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_) | Self::Api { status: 401, .. }
        )
    }

    /// HTTP status code carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{}", app_error).contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Missing API base URL".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: Missing API base URL"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "contact_email".to_string(),
            message: "Field is required".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Validation error: contact_email - Field is required"
        );
    }

    #[test]
    fn test_authentication_error() {
        let error = Error::Authentication("No authenticated user found".to_string());
        assert_eq!(
            format!("{}", error),
            "Authentication failed: No authenticated user found"
        );
    }

    #[test]
    fn test_api_error_display() {
        let error = Error::Api {
            status: 422,
            message: "enrollment_status must be one of pending, approved, rejected".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("422"));
        assert!(display.contains("enrollment_status"));
    }

    #[test]
    fn test_unknown_field_error() {
        let error = Error::UnknownField {
            resource: "businesses".to_string(),
            field: "views_count".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Field views_count is not mutable on businesses"
        );
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "referralProfiles/abc123".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Resource not found: referralProfiles/abc123"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_is_auth() {
        assert!(Error::Authentication("expired".to_string()).is_auth());
        assert!(Error::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        }
        .is_auth());
        assert!(!Error::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .is_auth());
        assert!(!Error::Http("connection refused".to_string()).is_auth());
    }

    #[test]
    fn test_status_accessor() {
        let error = Error::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(error.status(), Some(404));
        assert_eq!(Error::Other("x".to_string()).status(), None);
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Http("test".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_all_error_display_variants() {
        let test_cases = vec![
            (Error::Io(io::Error::other("test")), "I/O error:"),
            (
                Error::Configuration {
                    message: "config error".to_string(),
                },
                "Configuration error: config error",
            ),
            (
                Error::Validation {
                    field: "field1".to_string(),
                    message: "invalid".to_string(),
                },
                "Validation error: field1 - invalid",
            ),
            (
                Error::Authentication("auth error".to_string()),
                "Authentication failed: auth error",
            ),
            (
                Error::Http("connect timeout".to_string()),
                "HTTP error: connect timeout",
            ),
            (
                Error::Api {
                    status: 500,
                    message: "internal".to_string(),
                },
                "API error (500): internal",
            ),
            (
                Error::NotFound {
                    resource: "users/u1".to_string(),
                },
                "Resource not found: users/u1",
            ),
            (Error::Other("other error".to_string()), "other error"),
        ];

        for (error, expected_contains) in test_cases {
            let display_str = format!("{}", error);
            assert!(
                display_str.contains(expected_contains),
                "Error display '{}' should contain '{}'",
                display_str,
                expected_contains
            );
        }
    }
}
