use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key or file that caused the error (e.g., "base_url", "warera.yaml")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "env", "yaml")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the WarEra client.
///
/// The first three variants are the failure taxonomy of a remote call:
/// the exchange did not complete, a 2xx body was not JSON, or the server
/// answered with a non-success status. None of them is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Bad JSON in response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Remote error: HTTP {status}: {reason}")]
    Remote { status: u16, reason: String },

    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },

    #[error("No {kind} named {name:?}")]
    NotFound { kind: &'static str, name: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn decode(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Error::Decode {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn unexpected(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::UnexpectedResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// HTTP status of a remote error, if this is one.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_carries_status_and_reason() {
        let err = Error::Remote {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Remote error: HTTP 503: Service Unavailable");
        assert_eq!(err.remote_status(), Some(503));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_configuration_error_formats_context() {
        let err = Error::configuration_with_context(
            "invalid base url",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_source("env"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid base url (field: base_url, source: env)"
        );
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("base_url")
        );
    }

    #[test]
    fn test_decode_helper() {
        let err = Error::decode("/user.getUserLite", "expected value at line 1 column 1");
        assert!(err.is_decode());
        assert!(err.to_string().contains("/user.getUserLite"));
    }

    #[test]
    fn test_not_found_names_the_lookup() {
        let err = Error::not_found("country", "Atlantis");
        assert_eq!(err.to_string(), r#"No country named "Atlantis""#);
    }
}
