//! # Identity Records
//!
//! `Individual` and `Organization`, the two registered identity kinds.
//! Both are create-only: once stored for an account they are never deleted,
//! and registration never overwrites an existing record.
//!
//! ## Verification Gate
//!
//! `Organization.verified` starts `false` and moves to `true` exactly once,
//! via [`Organization::mark_verified`]. There is no path back — the flag is
//! a one-way gate, checked at certificate issuance time.

use serde::{Deserialize, Serialize};

use attesta_core::Timestamp;

/// A registered learner identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Display name.
    pub name: String,
    /// Date of birth, as supplied at registration (opaque to the registry).
    pub date_of_birth: String,
    /// Contact email.
    pub email: String,
    /// When the record was created.
    pub registered_at: Timestamp,
}

/// A registered credential-issuing entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Display name.
    pub name: String,
    /// Contact information, as supplied at registration.
    pub contact_info: String,
    /// Whether the organization has passed verification. One-way: false → true.
    pub verified: bool,
    /// When the record was created.
    pub registered_at: Timestamp,
}

impl Individual {
    /// Create a learner record stamped with the registration time.
    pub fn new(
        name: String,
        date_of_birth: String,
        email: String,
        registered_at: Timestamp,
    ) -> Self {
        Self {
            name,
            date_of_birth,
            email,
            registered_at,
        }
    }
}

impl Organization {
    /// Create an issuer record. New organizations are always unverified.
    pub fn new(name: String, contact_info: String, registered_at: Timestamp) -> Self {
        Self {
            name,
            contact_info,
            verified: false,
            registered_at,
        }
    }

    /// Pass the verification gate. Idempotent; there is no reverse operation.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}
