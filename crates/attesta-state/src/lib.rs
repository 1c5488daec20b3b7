//! # attesta-state — Registry Domain Records
//!
//! Pure domain records for the Attesta credential registry. This crate holds
//! the shapes that get persisted and the small amount of behavior attached to
//! them; it performs no storage, no I/O, and no authorization — those live in
//! `attesta-platform` and `attesta-registry`.
//!
//! ## Records
//!
//! - **Identity** (`identity.rs`): `Individual` learner records and
//!   `Organization` issuer records with the one-way `verified` gate.
//!
//! - **Certificate** (`certificate.rs`): `Certificate` with its bound
//!   `CertificateMetadata`, the open-ended `CertificateStatus` set, and the
//!   caller-supplied `CertificateDraft` the registry fills in at issuance.
//!
//! - **Audit** (`audit.rs`): `AuditEntry` / `AuditAction`, the append-only
//!   per-certificate history vocabulary.
//!
//! - **Reward** (`reward.rs`): immutable milestone grant records.
//!
//! ## Design
//!
//! Records carry their binding rules with them: `CertificateMetadata::bind`
//! is the only way to assemble metadata, so caller-supplied learner, course,
//! and issuer fields can never leak into a stored certificate. Status
//! strings normalize through `CertificateStatus`, so `"revoked"` written by
//! any path compares equal to [`CertificateStatus::Revoked`].

pub mod audit;
pub mod certificate;
pub mod identity;
pub mod reward;

pub use audit::{AuditAction, AuditEntry};
pub use certificate::{Certificate, CertificateDraft, CertificateMetadata, CertificateStatus};
pub use identity::{Individual, Organization};
pub use reward::Reward;
