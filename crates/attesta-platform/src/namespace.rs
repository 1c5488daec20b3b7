//! # Key-Value Namespaces
//!
//! The closed set of namespaces registry state persists into. Keeping the
//! set an enum (rather than free-form string prefixes) means a typo'd
//! namespace is a compile error, and hosts can allocate storage per
//! namespace without parsing keys.

/// A registry storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// `Individual` records, keyed by account identity.
    Individuals,
    /// `Organization` records, keyed by account identity.
    Organizations,
    /// `Certificate` records, keyed by certificate id.
    Certificates,
    /// Per-certificate audit history, keyed by certificate id.
    CertificateHistory,
    /// `Reward` records, keyed by reward id.
    Rewards,
    /// Reward-id lists keyed by learner account (the secondary index).
    RewardsByLearner,
    /// Monotonic id counters, keyed by counter name.
    Counters,
}

impl Namespace {
    /// Stable storage prefix for this namespace.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individuals => "individuals",
            Self::Organizations => "organizations",
            Self::Certificates => "certificates",
            Self::CertificateHistory => "certificate_history",
            Self::Rewards => "rewards",
            Self::RewardsByLearner => "rewards_by_learner",
            Self::Counters => "counters",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
