//! # Dispatch Error Types
//!
//! Envelope errors layered over the domain taxonomy. Unknown operation
//! names and malformed argument payloads fail here, before any component
//! runs; domain failures pass through unchanged via `#[from]`. Every error
//! maps to a machine-readable code and a structured JSON body for the
//! embedding host to return verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use attesta_core::RegistryError;

/// Structured JSON error body.
///
/// All failed requests answer with this shape. The `details` field carries
/// additional context for argument and lookup failures and is omitted
/// otherwise.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. `"NOT_FOUND"`, `"UNAUTHORIZED"`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional context, present only where it adds information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Failure of a dispatched request.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The operation name is not part of the surface.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The arguments payload does not match the operation's shape.
    #[error("invalid arguments for {operation}: {source}")]
    InvalidArguments {
        /// The operation whose arguments failed to parse.
        operation: &'static str,
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A domain failure surfaced by a registry component.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl DispatchError {
    /// The machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "UNKNOWN_OPERATION",
            Self::InvalidArguments { .. } => "INVALID_ARGUMENTS",
            Self::Registry(err) => match err {
                RegistryError::AlreadyRegistered { .. } => "ALREADY_REGISTERED",
                RegistryError::NotFound { .. } => "NOT_FOUND",
                RegistryError::Unauthorized(_) => "UNAUTHORIZED",
                RegistryError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
                RegistryError::Revoked(_) => "REVOKED",
                RegistryError::Platform(_) => "PLATFORM_ERROR",
                RegistryError::Codec(_) => "CODEC_ERROR",
            },
        }
    }

    /// The structured JSON body for this error.
    pub fn body(&self) -> ErrorBody {
        let details = match self {
            Self::InvalidArguments { operation, .. } => {
                Some(serde_json::json!({ "operation": operation }))
            }
            Self::Registry(
                RegistryError::AlreadyRegistered { kind, id } | RegistryError::NotFound { kind, id },
            ) => Some(serde_json::json!({ "kind": kind, "id": id })),
            _ => None,
        };
        ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                details,
            },
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
