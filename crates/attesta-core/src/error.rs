//! # Error Types — Registry Failure Taxonomy
//!
//! Defines the error types used throughout the registry. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every registry operation either fully succeeds or surfaces exactly one
//!   of these errors; the platform discards all writes of a failed request,
//!   so no partial effect accompanies an error.
//! - Domain failures (`AlreadyRegistered`, `NotFound`, `Unauthorized`,
//!   `InsufficientFunds`, `Revoked`) name the record kind and identifier
//!   involved.
//! - Host failures propagate through `Platform`; record encoding failures
//!   through `Codec`.

use thiserror::Error;

use crate::amount::Amount;

/// Top-level error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A create-only record already exists for this identity.
    #[error("{kind} already registered: {id}")]
    AlreadyRegistered {
        /// Record kind ("individual" or "organization").
        kind: String,
        /// The account identity that is already registered.
        id: String,
    },

    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("individual", "organization", "certificate", "account").
        kind: String,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The caller is not permitted to perform this operation.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The value attached to the request does not cover the requested amount.
    #[error("insufficient funds: required {required}, attached {attached}")]
    InsufficientFunds {
        /// The amount the operation asked to move.
        required: Amount,
        /// The value actually attached to the request.
        attached: Amount,
    },

    /// The certificate has been revoked.
    #[error("certificate revoked: {0}")]
    Revoked(String),

    /// The platform host failed (storage or transfer).
    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),

    /// A record or value could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(String),
}

/// Error surfaced by the execution host.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Key-value storage failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// Value transfer failed.
    #[error("transfer failure: {0}")]
    Transfer(String),
}
