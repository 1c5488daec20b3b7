//! # attesta-registry — Registry Components
//!
//! The four components of the credential registry, each a thin
//! authorization-and-invariants layer over a
//! [`HostEnv`](attesta_platform::HostEnv):
//!
//! - **IdentityRegistry** (`identity.rs`): create-only registration of
//!   individuals and organizations, lookups, and the one-way organization
//!   verification gate behind a configurable policy.
//!
//! - **CertificateRegistry** (`certificate.rs`): certificate issuance by
//!   verified organizations, issuer-bound status updates and revocation,
//!   three-way validation, and the append-only audit history.
//!
//! - **RewardLedger** (`reward.rs`): milestone grants with an independent
//!   monotonic id counter and a learner-keyed secondary index for listing.
//!
//! - **PaymentGateway** (`payment.rs`): attached-value authorization in
//!   front of the platform's transfer primitive.
//!
//! ## Design
//!
//! Components hold configuration only — all state lives behind the env,
//! passed into every operation as an explicit parameter. Monotonic id
//! counters are ordinary records in the same transactional store, so a
//! failed request rolls its counter increment back and identifiers stay
//! dense. Every successful mutating operation emits a structured `tracing`
//! event; authorization rejections emit warnings.

pub mod certificate;
pub mod config;
pub mod identity;
pub mod payment;
pub mod reward;

mod store;

pub use certificate::{CertificateRegistry, CertificateValidation};
pub use config::{RegistryConfig, VerificationPolicy, DEFAULT_REWARD_AMOUNT};
pub use identity::IdentityRegistry;
pub use payment::PaymentGateway;
pub use reward::RewardLedger;
