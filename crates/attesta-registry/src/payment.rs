//! # Payment Authorization
//!
//! A thin authorization layer in front of the platform's transfer
//! primitive. The gateway holds no state of its own — it checks the
//! attached value and the recipient, then delegates.
//!
//! ## Check Order
//!
//! The attached-value check runs first: a request with insufficient value
//! fails `InsufficientFunds` even when the recipient is unknown, and a
//! request with ample value fails `NotFound` when the recipient is neither
//! a registered individual nor organization. Excess attached value is the
//! platform's concern, not the gateway's.

use attesta_core::{AccountId, Amount, RegistryError};
use attesta_platform::HostEnv;

use crate::identity::{load_individual, load_organization};
use crate::store;

/// Attached-value payment authorization.
#[derive(Debug, Clone, Default)]
pub struct PaymentGateway;

impl PaymentGateway {
    /// Create the gateway.
    pub fn new() -> Self {
        Self
    }

    /// Move `amount` of the caller's attached value to `recipient_id`.
    pub fn process_payment<E>(
        &self,
        env: &mut E,
        recipient_id: &AccountId,
        amount: Amount,
    ) -> Result<(), RegistryError>
    where
        E: HostEnv + ?Sized,
    {
        let caller = store::require_caller(env)?;
        let attached = env.attached_value();
        if !attached.covers(amount) {
            return Err(RegistryError::InsufficientFunds {
                required: amount,
                attached,
            });
        }
        let recipient_registered = load_individual(env, recipient_id)?.is_some()
            || load_organization(env, recipient_id)?.is_some();
        if !recipient_registered {
            return Err(RegistryError::NotFound {
                kind: "account".to_string(),
                id: recipient_id.0.clone(),
            });
        }
        env.transfer(recipient_id, amount)?;
        tracing::info!(
            payer = %caller,
            recipient = %recipient_id,
            amount = %amount,
            "payment processed"
        );
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
