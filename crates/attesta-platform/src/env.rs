//! # The Host Environment Seam
//!
//! [`HostEnv`] is everything the registry is allowed to see of the outside
//! world: who is calling, what time it is, what value rides on the request,
//! a namespaced key-value store, and a transfer primitive. Every registry
//! operation takes an env as an explicit parameter — there is no ambient
//! global state.
//!
//! Hosts must honor the apply-or-discard contract: if the operation they ran
//! returns an error, none of the `put` and `transfer` calls it made may
//! become visible. The reference implementation is
//! [`crate::memory::MemoryPlatform`].

use attesta_core::{AccountId, Amount, PlatformError, Timestamp};

use crate::namespace::Namespace;

/// The execution host as seen by one in-flight operation.
pub trait HostEnv {
    /// The authenticated caller, if the request carries one.
    fn caller(&self) -> Option<&AccountId>;

    /// The current platform time. Stable for the duration of one request.
    fn now(&self) -> Timestamp;

    /// The transferable value attached to the request.
    fn attached_value(&self) -> Amount;

    /// Read a record. `None` when the key has never been written.
    fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>, PlatformError>;

    /// Write a record, replacing any previous value.
    fn put(&mut self, namespace: Namespace, key: &str, value: String)
        -> Result<(), PlatformError>;

    /// Move `amount` of the attached value to `recipient`.
    fn transfer(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), PlatformError>;
}

/// The identity and value a host binds to a request before executing it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated caller, if any. Read-only operations may run
    /// without one.
    pub caller: Option<AccountId>,
    /// The transferable value attached to the request.
    pub attached_value: Amount,
}

impl RequestContext {
    /// A request with no caller identity and no attached value.
    pub fn anonymous() -> Self {
        Self {
            caller: None,
            attached_value: Amount::ZERO,
        }
    }

    /// A request authenticated as `caller`, with no attached value.
    pub fn authenticated(caller: AccountId) -> Self {
        Self {
            caller: Some(caller),
            attached_value: Amount::ZERO,
        }
    }

    /// Attach transferable value to the request.
    pub fn with_value(mut self, amount: Amount) -> Self {
        self.attached_value = amount;
        self
    }
}
