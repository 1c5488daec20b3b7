//! # Reference In-Memory Host
//!
//! [`MemoryPlatform`] is the reference [`HostEnv`] provider: a `BTreeMap`
//! store, a logical clock, and a transfer log. One request at a time runs
//! through [`MemoryPlatform::execute`] against a [`StagedEnv`] overlay —
//! reads fall through to committed state, writes and transfers buffer in
//! the overlay, and the whole buffer is committed or discarded based on the
//! operation's outcome.
//!
//! ## Clock
//!
//! The clock is logical: it starts at a fixed genesis instant and ticks one
//! second at the start of every request, so consecutive requests always
//! observe strictly increasing time. Tests can jump it forward with
//! [`MemoryPlatform::advance_clock`].

use std::collections::BTreeMap;

use attesta_core::{AccountId, Amount, PlatformError, Timestamp};

use crate::env::{HostEnv, RequestContext};
use crate::namespace::Namespace;

/// Clock origin for a fresh platform: 2025-01-01T00:00:00Z.
const GENESIS_EPOCH_SECS: i64 = 1_735_689_600;

/// One committed value transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    /// Who received the value.
    pub recipient: AccountId,
    /// How much moved.
    pub amount: Amount,
}

/// In-memory execution host with atomic apply-or-discard requests.
#[derive(Debug)]
pub struct MemoryPlatform {
    records: BTreeMap<(Namespace, String), String>,
    transfers: Vec<TransferRecord>,
    clock: Timestamp,
}

impl MemoryPlatform {
    /// Create an empty platform with the clock at genesis.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            transfers: Vec::new(),
            clock: Timestamp::from_epoch_secs(GENESIS_EPOCH_SECS)
                .unwrap_or(Timestamp::UNIX_EPOCH),
        }
    }

    /// The current clock reading. The next request observes one second later.
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Advance the clock by `secs`. Jumps past the representable datetime
    /// range are ignored.
    pub fn advance_clock(&mut self, secs: i64) {
        let target = self.clock.epoch_secs().saturating_add(secs);
        if let Ok(ts) = Timestamp::from_epoch_secs(target) {
            self.clock = ts;
        }
    }

    /// Run one operation atomically.
    ///
    /// The operation sees a [`StagedEnv`]: reads hit its own writes first,
    /// then committed state. On `Ok` every buffered write and transfer is
    /// committed; on `Err` the whole buffer is discarded and committed state
    /// is untouched.
    pub fn execute<T, E, F>(&mut self, ctx: RequestContext, op: F) -> Result<T, E>
    where
        F: FnOnce(&mut StagedEnv<'_>) -> Result<T, E>,
    {
        self.advance_clock(1);

        let mut env = StagedEnv {
            committed: &self.records,
            caller: ctx.caller,
            now: self.clock,
            attached_value: ctx.attached_value,
            writes: BTreeMap::new(),
            transfers: Vec::new(),
        };

        let outcome = op(&mut env);
        let StagedEnv {
            writes, transfers, ..
        } = env;

        match outcome {
            Ok(value) => {
                tracing::debug!(
                    writes = writes.len(),
                    transfers = transfers.len(),
                    "request committed"
                );
                self.records.extend(writes);
                self.transfers.extend(transfers);
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(
                    discarded_writes = writes.len(),
                    discarded_transfers = transfers.len(),
                    "request rolled back"
                );
                Err(err)
            }
        }
    }

    /// All transfers committed so far, in commit order.
    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }

    /// Read committed state directly, bypassing any request. Test hook.
    pub fn committed(&self, namespace: Namespace, key: &str) -> Option<&str> {
        self.records
            .get(&(namespace, key.to_string()))
            .map(String::as_str)
    }
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// The per-request overlay handed to an executing operation.
///
/// Writes and transfers buffer here until [`MemoryPlatform::execute`]
/// decides their fate.
#[derive(Debug)]
pub struct StagedEnv<'a> {
    committed: &'a BTreeMap<(Namespace, String), String>,
    caller: Option<AccountId>,
    now: Timestamp,
    attached_value: Amount,
    writes: BTreeMap<(Namespace, String), String>,
    transfers: Vec<TransferRecord>,
}

impl HostEnv for StagedEnv<'_> {
    fn caller(&self) -> Option<&AccountId> {
        self.caller.as_ref()
    }

    fn now(&self) -> Timestamp {
        self.now
    }

    fn attached_value(&self) -> Amount {
        self.attached_value
    }

    fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>, PlatformError> {
        let key = (namespace, key.to_string());
        if let Some(value) = self.writes.get(&key) {
            return Ok(Some(value.clone()));
        }
        Ok(self.committed.get(&key).cloned())
    }

    fn put(
        &mut self,
        namespace: Namespace,
        key: &str,
        value: String,
    ) -> Result<(), PlatformError> {
        self.writes.insert((namespace, key.to_string()), value);
        Ok(())
    }

    fn transfer(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), PlatformError> {
        self.transfers.push(TransferRecord {
            recipient: recipient.clone(),
            amount,
        });
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
