//! # attesta-platform — Execution Host Abstraction
//!
//! The registry never talks to a clock, a caller, a key-value store, or a
//! value-transfer primitive directly — it talks to a [`HostEnv`]. This crate
//! defines that seam and ships the reference host used for embedding and
//! testing.
//!
//! ## Pieces
//!
//! - **`env.rs`**: the [`HostEnv`] trait (caller identity, time, attached
//!   value, namespaced get/put, transfer) and [`RequestContext`], the
//!   per-request identity and attached value a host binds before executing.
//!
//! - **`namespace.rs`**: [`Namespace`], the closed set of key-value
//!   namespaces the registry persists into.
//!
//! - **`memory.rs`**: [`MemoryPlatform`], an in-memory host whose
//!   [`MemoryPlatform::execute`] runs one operation against a staged overlay
//!   and commits writes and transfers only when the operation returns `Ok`.
//!   This realizes the atomic apply-or-discard contract every deployment
//!   host must provide.
//!
//! ## Contract
//!
//! Requests are strictly sequential: `execute` takes `&mut self`, so two
//! operations can never interleave reads and writes. A failed operation
//! leaves no observable effect — no writes, no transfers, no consumed
//! identifiers.

pub mod env;
pub mod memory;
pub mod namespace;

pub use env::{HostEnv, RequestContext};
pub use memory::{MemoryPlatform, StagedEnv, TransferRecord};
pub use namespace::Namespace;
