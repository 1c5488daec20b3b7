//! # attesta-core — Foundational Types for the Attesta Registry
//!
//! This crate is the bedrock of the Attesta credential registry. It defines
//! the type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `AccountId`,
//!    `CertificateId`, `RewardId`, `CourseId` — you cannot pass a reward id
//!    where a certificate id is expected. No bare strings for identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so every stored record and audit entry
//!    renders the same instant identically.
//!
//! 3. **Exact amounts, never floats.** `Amount` is an unsigned 128-bit value
//!    carried as a decimal string on the wire. No `f64` exists anywhere on a
//!    value path.
//!
//! 4. **One error taxonomy.** `RegistryError` covers every failure a registry
//!    operation can surface; `PlatformError` covers the execution host.
//!    Higher layers wrap these, never redefine them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attesta-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and the stored ones
//!   implement `Serialize`/`Deserialize`.

pub mod amount;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use amount::Amount;
pub use error::{PlatformError, RegistryError};
pub use identity::{AccountId, CertificateId, CourseId, RewardId};
pub use temporal::Timestamp;
