use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::{StatusCode, header::CONTENT_RANGE};
use log::{debug, error};
use serde_json::json;
use std::fmt;

/// Errors that can happen inside reelgrid
#[derive(Debug)]
pub enum Error {
    // Request errors
    /// A required query parameter is missing or empty
    InvalidRequest {
        /// Name of the missing parameter
        parameter: String,
        /// Message returned to the caller
        context: String,
    },
    /// The `Range` header could not be parsed
    InvalidRange {
        /// The raw header value
        header: String,
        /// Why parsing failed
        reason: String,
    },
    /// The `Range` header lies outside the file
    RangeNotSatisfiable {
        /// The raw header value
        header: String,
        /// Size of the requested file
        file_size: u64,
    },

    // Configuration errors
    /// A configuration value is out of its accepted range
    InvalidConfig {
        /// Name of the offending setting
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    // Filesystem errors
    /// Media file or directory does not exist or is not accessible
    MediaFileNotFound {
        /// Path to the missing file
        path: String,
        /// Additional context about the file access attempt
        context: String,
    },
    /// Reading a file or directory failed unexpectedly
    MediaReadFailed {
        /// Path being read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    // Server errors
    /// Failed to parse host or IP address
    NetworkAddressParseError {
        /// The address that failed to parse
        address: String,
        /// The reason for the parsing failure
        reason: String,
    },
    /// Failed to identify local IP address
    LocalAddressResolutionFailed {
        /// The underlying error from local IP detection
        source: local_ip_address::Error,
        /// Additional context about the resolution attempt
        context: String,
    },
    /// The HTTP server failed to bind or serve
    ServerError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Additional context about the failure
        context: String,
    },

    // Template rendering errors
    /// Template rendering encountered an error
    TemplateRenderError {
        /// The name of the template that failed to render
        template_name: String,
        /// The underlying template error
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidRequest { .. } | Error::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            Error::RangeNotSatisfiable { .. } => StatusCode::RANGE_NOT_SATISFIABLE,
            Error::MediaFileNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRequest { parameter, context } => {
                write!(f, "{context} (parameter '{parameter}')")
            }
            Error::InvalidRange { header, reason } => {
                write!(f, "Invalid range '{header}': {reason}")
            }
            Error::RangeNotSatisfiable { header, file_size } => {
                write!(
                    f,
                    "Range '{header}' not satisfiable for file of {file_size} bytes"
                )
            }
            Error::InvalidConfig { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
            Error::MediaFileNotFound { path, context } => {
                write!(f, "Media file '{path}' not found: {context}")
            }
            Error::MediaReadFailed { path, source } => {
                write!(f, "Failed to read '{path}': {source}")
            }
            Error::NetworkAddressParseError { address, reason } => {
                write!(f, "Failed to parse network address '{address}': {reason}")
            }
            Error::LocalAddressResolutionFailed { source, context } => {
                write!(f, "Failed to resolve local address: {source} ({context})")
            }
            Error::ServerError { source, context } => {
                write!(f, "Server error: {source} ({context})")
            }
            Error::TemplateRenderError {
                template_name,
                source,
            } => {
                write!(f, "Failed to render template '{template_name}': {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MediaReadFailed { source, .. } => Some(source),
            Error::LocalAddressResolutionFailed { source, .. } => Some(source),
            Error::ServerError { source, .. } => Some(source),
            Error::TemplateRenderError { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{self}");
        } else {
            debug!("Rejecting request: {self}");
        }

        let body = Json(json!({ "error": self.to_string() }));
        match self {
            Error::RangeNotSatisfiable { file_size, .. } => (
                status,
                [(CONTENT_RANGE, format!("bytes */{file_size}"))],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
