//! Error types for server start-up and request handling.

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use camino::Utf8PathBuf;
use serde_json::json;
use thiserror::Error;
use trippick_core::{CatalogueError, StoreError};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The configured bind address is not an IP address.
    #[error("invalid bind address '{bind}': {source}")]
    InvalidBindAddress {
        /// Address as configured.
        bind: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the catalogue file failed.
    #[error("failed to read catalogue at {path:?}: {source}")]
    ReadCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue file's contents were rejected.
    #[error("catalogue at {path:?} is invalid: {source}")]
    InvalidCatalogue {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: CatalogueError,
    },
    /// Building the Tokio runtime failed.
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Binding the listener failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested socket address.
        addr: std::net::SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors returned by API handlers, rendered as `{"message": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound {
        /// Client-facing message.
        message: &'static str,
    },
    /// The request payload was rejected.
    #[error("{message}")]
    Validation {
        /// Client-facing message.
        message: &'static str,
    },
    /// Reading or writing shared state failed.
    #[error("{message}")]
    Internal {
        /// Client-facing message.
        message: &'static str,
        /// Store failure, logged but not exposed.
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure with the handler's client-facing message.
    pub(crate) fn internal(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Internal { message, source }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, source } = &self {
            tracing::error!(error = %source, "{message}");
        }
        let body = json!({ "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
