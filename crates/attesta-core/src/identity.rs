//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all registry identifiers. These prevent accidental
//! identifier confusion — you cannot pass a `RewardId` where a
//! `CertificateId` is expected, and a learner's `AccountId` cannot silently
//! stand in for a course code.
//!
//! ## Identifier Origins
//!
//! - `AccountId` values come from the platform's caller identity and are
//!   opaque to the registry.
//! - `CertificateId` / `RewardId` values are allocated by the registry from
//!   monotonic counters and carry a fixed `cert_` / `reward_` prefix.
//! - `CourseId` values are caller-supplied course codes.

use serde::{Deserialize, Serialize};

/// Platform-supplied account identity (an individual or an organization).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Registry-allocated certificate identifier (`cert_<n>`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CertificateId(pub String);

/// Registry-allocated reward identifier (`reward_<n>`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RewardId(pub String);

/// Caller-supplied course code a certificate is issued against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl AccountId {
    /// Wrap a platform account identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CertificateId {
    /// Wrap an existing certificate identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the identifier for the `n`-th issued certificate.
    pub fn from_counter(n: u64) -> Self {
        Self(format!("cert_{n}"))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RewardId {
    /// Wrap an existing reward identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the identifier for the `n`-th granted reward.
    pub fn from_counter(n: u64) -> Self {
        Self(format!("reward_{n}"))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CourseId {
    /// Wrap a course code.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
