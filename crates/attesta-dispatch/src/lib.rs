//! # attesta-dispatch — Request Router
//!
//! The explicit operation surface of the registry: named operations with
//! JSON arguments, routed onto the typed components and answered with JSON.
//! In-process rather than networked — an embedding host hands each request
//! to [`Router::handle`] together with the platform and a
//! [`RequestContext`](attesta_platform::RequestContext).
//!
//! ## Pieces
//!
//! - `operation.rs` — the [`Operation`] enum: one variant per operation,
//!   parsed from name + arguments, tagged read-only or mutating.
//! - `router.rs` — the [`Router`]: owns the component instances, runs one
//!   operation per request inside a tracing span keyed by a UUID request id.
//! - `error.rs` — [`DispatchError`]: envelope failures (unknown operation,
//!   malformed arguments) layered over the domain taxonomy, with a
//!   machine-readable code and a structured JSON body.
//!
//! ## Contract
//!
//! Mutating operations require an authenticated caller; read-only
//! operations accept anonymous requests. Every request is atomic: the
//! platform commits its writes only when the operation returns `Ok`.

pub mod error;
pub mod operation;
pub mod router;

pub use error::{DispatchError, ErrorBody, ErrorDetail};
pub use operation::{Operation, OperationKind, OPERATION_NAMES};
pub use router::{Call, Router};
