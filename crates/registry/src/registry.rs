//! Participant registry handlers
//!
//! Stateless logic over the participant store: validated registration,
//! admin-gated certification with a reward payout, and the read accessors.
//! Precondition failures abort the call before any store write, so a failed
//! call never leaves a partial mutation behind.

use crate::config::RegistryConfig;
use crate::errors::{RegistryError, Result};
use crate::runtime::LedgerRuntime;
use crate::store::RegistryStore;
use credence_types::{AccountId, DisplayAmount, Participant};
use tracing::{info, warn};

/// Minimum display-name length accepted at registration.
pub const MIN_NAME_LENGTH: usize = 3;

/// The registry contract: handlers bound to a store and an instance config.
pub struct ProgramRegistry<S> {
    store: S,
    config: RegistryConfig,
}

impl<S: RegistryStore> ProgramRegistry<S> {
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register the calling account as a participant.
    ///
    /// Preconditions, checked in order: `age > 0`, name of at least
    /// [`MIN_NAME_LENGTH`] characters, and an attached deposit covering the
    /// registration fee. A repeat registration by the same caller
    /// overwrites the prior record wholesale. The fee stays with the
    /// contract.
    pub fn register(&self, runtime: &dyn LedgerRuntime, name: &str, age: u64) -> Result<()> {
        if age == 0 {
            return Err(RegistryError::InvalidAge);
        }
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(RegistryError::InvalidName);
        }
        if runtime.attached_deposit() < self.config.registration_fee {
            return Err(RegistryError::InsufficientPayment);
        }

        let account = runtime.caller();
        self.store
            .set(Participant::new(account.clone(), name, age))?;

        info!(account = %account, name, age, "participant registered");
        Ok(())
    }

    /// Certify a participant and pay out the reward.
    ///
    /// Only the configured admin may call this. Returns `Ok(true)` when the
    /// flag was flipped and the reward transfer requested; `Ok(false)` when
    /// the account is unregistered or already certified (no mutation, no
    /// transfer in either case).
    pub fn certify(&self, runtime: &dyn LedgerRuntime, account: &AccountId) -> Result<bool> {
        if runtime.caller() != self.config.admin {
            return Err(RegistryError::Unauthorized);
        }

        match self.store.get(account)? {
            None => {
                warn!(account = %account, "certification target not registered");
                Ok(false)
            }
            Some(participant) if participant.certified => {
                warn!(account = %account, "participant already certified");
                Ok(false)
            }
            Some(mut participant) => {
                participant.certified = true;
                // The record must be persisted before the transfer request;
                // the host settles transfers after the call commits and a
                // rejection cannot unwind the flag.
                self.store.set(participant)?;

                let reward = self.config.certification_reward;
                match runtime.transfer(account, reward) {
                    Ok(()) => {
                        info!(
                            account = %account,
                            reward = %DisplayAmount(reward),
                            "participant certified, reward transferred"
                        );
                    }
                    Err(error) => {
                        warn!(
                            account = %account,
                            error = %error,
                            "participant certified, but reward transfer was rejected"
                        );
                    }
                }
                Ok(true)
            }
        }
    }

    /// Look up one participant.
    pub fn get(&self, account: &AccountId) -> Result<Option<Participant>> {
        self.store.get(account)
    }

    /// List every registered participant.
    pub fn list(&self) -> Result<Vec<Participant>> {
        self.store.list()
    }
}
