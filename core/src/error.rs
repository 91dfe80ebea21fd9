//! Error types for the Sylius cart and checkout client.
//!
//! # Design
//! Three failure families reach callers. `InvalidArgument` is raised locally
//! before any I/O. `Validation` means the server rejected an otherwise
//! well-formed payload with a 400 on an operation that documents it. All
//! other unexpected statuses go through `from_failed_response`, which keeps
//! the status and raw body. Transport and decoding failures sit beside them
//! so nothing a caller might see is flattened into a string.

use thiserror::Error;

use crate::http::HttpResponse;

/// Errors returned by `SyliusClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was empty or zero. No request was sent.
    #[error("invalid argument `{field}`: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    /// The server rejected the semantic content of the request.
    #[error("validation failed (HTTP {status})")]
    Validation { status: u16, body: String },

    #[error("bad request: {body}")]
    BadRequest { body: String },

    #[error("unauthorized: {body}")]
    Unauthorized { body: String },

    #[error("forbidden: {body}")]
    Forbidden { body: String },

    #[error("resource not found")]
    NotFound { body: String },

    #[error("server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A success body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The gateway failed before producing a response.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse grouping of `ApiError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    DomainValidation,
    GenericApi,
    Decoding,
    Transport,
}

impl ApiError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Shared mapping for statuses that no operation rule recognises.
    ///
    /// Always produces an error; callers use it only for failing responses.
    pub fn from_failed_response(response: HttpResponse) -> Self {
        let HttpResponse { status, body, .. } = response;
        match status {
            400 => ApiError::BadRequest { body },
            401 => ApiError::Unauthorized { body },
            403 => ApiError::Forbidden { body },
            404 => ApiError::NotFound { body },
            500..=599 => ApiError::Server { status, body },
            _ => ApiError::Http { status, body },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ApiError::Validation { .. } => ErrorKind::DomainValidation,
            ApiError::BadRequest { .. }
            | ApiError::Unauthorized { .. }
            | ApiError::Forbidden { .. }
            | ApiError::NotFound { .. }
            | ApiError::Server { .. }
            | ApiError::Http { .. } => ErrorKind::GenericApi,
            ApiError::Deserialization(_) | ApiError::Serialization(_) => ErrorKind::Decoding,
            ApiError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// HTTP status carried by server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation { status, .. }
            | ApiError::Server { status, .. }
            | ApiError::Http { status, .. } => Some(*status),
            ApiError::BadRequest { .. } => Some(400),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}
