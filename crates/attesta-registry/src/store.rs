//! # Typed Storage Helpers
//!
//! JSON codecs over the [`HostEnv`] key-value surface, the monotonic id
//! counters, and the caller-presence check shared by every mutating
//! operation.
//!
//! Counter values are ordinary records under [`Namespace::Counters`]. They
//! live in the same transactional store as the records they number, so a
//! request that allocates an id and then fails rolls the increment back —
//! issued identifiers stay dense.

use serde::de::DeserializeOwned;
use serde::Serialize;

use attesta_core::{AccountId, RegistryError};
use attesta_platform::{HostEnv, Namespace};

/// Load and decode one record. `None` when the key is absent.
pub(crate) fn load_json<T, E>(
    env: &E,
    namespace: Namespace,
    key: &str,
) -> Result<Option<T>, RegistryError>
where
    T: DeserializeOwned,
    E: HostEnv + ?Sized,
{
    let Some(raw) = env.get(namespace, key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw)
        .map_err(|err| RegistryError::Codec(format!("{namespace}/{key}: {err}")))?;
    Ok(Some(value))
}

/// Encode and store one record under `namespace/key`.
pub(crate) fn store_json<T, E>(
    env: &mut E,
    namespace: Namespace,
    key: &str,
    value: &T,
) -> Result<(), RegistryError>
where
    T: Serialize,
    E: HostEnv + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|err| RegistryError::Codec(format!("{namespace}/{key}: {err}")))?;
    env.put(namespace, key, raw)?;
    Ok(())
}

/// The authenticated caller, or `Unauthorized` for anonymous requests.
pub(crate) fn require_caller<E>(env: &E) -> Result<AccountId, RegistryError>
where
    E: HostEnv + ?Sized,
{
    env.caller().cloned().ok_or_else(|| {
        RegistryError::Unauthorized("operation requires an authenticated caller".to_string())
    })
}

/// The two monotonic id counters. Independent sequences, both starting at
/// zero, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Counter {
    Certificate,
    Reward,
}

impl Counter {
    /// Key under [`Namespace::Counters`].
    pub(crate) fn key(self) -> &'static str {
        match self {
            Counter::Certificate => "certificate",
            Counter::Reward => "reward",
        }
    }

    /// Advance the counter and return the new value. The first allocation
    /// returns 1.
    pub(crate) fn allocate<E>(self, env: &mut E) -> Result<u64, RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let current = match env.get(Namespace::Counters, self.key())? {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|err| RegistryError::Codec(format!("counters/{}: {err}", self.key())))?,
            None => 0,
        };
        let next = current + 1;
        env.put(Namespace::Counters, self.key(), next.to_string())?;
        Ok(next)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use attesta_platform::{MemoryPlatform, RequestContext};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        label: String,
    }

    // ── json codecs ──────────────────────────────────────────────────

    #[test]
    fn test_load_missing_record_is_none() {
        let mut platform = MemoryPlatform::new();
        let loaded: Result<Option<Probe>, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| {
                load_json(env, Namespace::Individuals, "ghost")
            });
        assert!(loaded.unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let mut platform = MemoryPlatform::new();
        let loaded: Result<Option<Probe>, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| {
                let probe = Probe {
                    label: "kept".to_string(),
                };
                store_json(env, Namespace::Individuals, "alice", &probe)?;
                load_json(env, Namespace::Individuals, "alice")
            });
        assert_eq!(
            loaded.unwrap(),
            Some(Probe {
                label: "kept".to_string()
            })
        );
    }

    #[test]
    fn test_corrupt_record_surfaces_codec_error_with_location() {
        let mut platform = MemoryPlatform::new();
        let _: Result<(), RegistryError> = platform.execute(RequestContext::anonymous(), |env| {
            env.put(Namespace::Individuals, "alice", "not json".to_string())?;
            Ok(())
        });
        let loaded: Result<Option<Probe>, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| {
                load_json(env, Namespace::Individuals, "alice")
            });
        match loaded {
            Err(RegistryError::Codec(msg)) => assert!(msg.contains("individuals/alice")),
            other => panic!("expected codec error, got {other:?}"),
        }
    }

    // ── counters ─────────────────────────────────────────────────────

    #[test]
    fn test_counter_allocates_dense_sequence() {
        let mut platform = MemoryPlatform::new();
        for expected in 1..=3u64 {
            let n: Result<u64, RegistryError> =
                platform.execute(RequestContext::anonymous(), |env| {
                    Counter::Certificate.allocate(env)
                });
            assert_eq!(n.unwrap(), expected);
        }
    }

    #[test]
    fn test_counters_are_independent() {
        let mut platform = MemoryPlatform::new();
        let (cert, reward): (u64, u64) = platform
            .execute::<_, RegistryError, _>(RequestContext::anonymous(), |env| {
                let c = Counter::Certificate.allocate(env)?;
                let r = Counter::Reward.allocate(env)?;
                Ok((c, r))
            })
            .unwrap();
        assert_eq!(cert, 1);
        assert_eq!(reward, 1);
    }

    #[test]
    fn test_failed_request_rolls_the_counter_back() {
        let mut platform = MemoryPlatform::new();
        let failed: Result<u64, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| {
                let n = Counter::Reward.allocate(env)?;
                assert_eq!(n, 1);
                Err(RegistryError::Unauthorized("later precondition".to_string()))
            });
        assert!(failed.is_err());
        let next: Result<u64, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| {
                Counter::Reward.allocate(env)
            });
        assert_eq!(next.unwrap(), 1);
    }

    // ── caller requirement ───────────────────────────────────────────

    #[test]
    fn test_require_caller_rejects_anonymous_requests() {
        let mut platform = MemoryPlatform::new();
        let outcome: Result<AccountId, RegistryError> =
            platform.execute(RequestContext::anonymous(), |env| require_caller(env));
        assert!(matches!(outcome, Err(RegistryError::Unauthorized(_))));
    }

    #[test]
    fn test_require_caller_returns_the_identity() {
        let mut platform = MemoryPlatform::new();
        let outcome: Result<AccountId, RegistryError> = platform.execute(
            RequestContext::authenticated(AccountId::new("alice")),
            |env| require_caller(env),
        );
        assert_eq!(outcome.unwrap(), AccountId::new("alice"));
    }
}
