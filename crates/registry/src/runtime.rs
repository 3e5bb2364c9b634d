//! Ledger host interface
//!
//! The surrounding ledger executes contract calls one at a time and supplies
//! each call's context: the signing caller, the value attached to the call,
//! and the ability to transfer value out of the contract's balance. The
//! registry core depends only on this trait, so a deterministic in-process
//! host (or a recording mock) can stand in for the real ledger.

use anyhow::Result;
use credence_types::{AccountId, Amount};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Interface to the ledger host for the duration of one contract call.
pub trait LedgerRuntime: Send + Sync {
    /// Identity of the account that signed the current call.
    fn caller(&self) -> AccountId;

    /// Value attached to the current call, in atomic units.
    fn attached_deposit(&self) -> Amount;

    /// Request a transfer from the contract's balance to `to`.
    ///
    /// The host settles the transfer after the call commits; a rejection
    /// here does not roll back state already written by the call.
    fn transfer(&self, to: &AccountId, amount: Amount) -> Result<()>;
}

// -----------------------------------------------------------------------------
// In-process implementation (for local execution and testing)
// -----------------------------------------------------------------------------

/// Deterministic in-process host.
///
/// Transfers credit a shared balance map; attached deposits are declared
/// up front by whoever constructs the call.
#[derive(Debug, Clone)]
pub struct LocalRuntime {
    caller: AccountId,
    attached_deposit: Amount,
    balances: Arc<RwLock<HashMap<AccountId, Amount>>>,
}

impl LocalRuntime {
    /// Create a host for a call signed by `caller` with no attached value.
    pub fn new(caller: AccountId) -> Self {
        Self {
            caller,
            attached_deposit: 0,
            balances: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Attach a deposit to the call.
    pub fn with_deposit(mut self, amount: Amount) -> Self {
        self.attached_deposit = amount;
        self
    }

    /// Re-contextualize for a follow-up call by a different signer,
    /// keeping the shared balance map.
    pub fn as_caller(&self, caller: AccountId, attached_deposit: Amount) -> Self {
        Self {
            caller,
            attached_deposit,
            balances: Arc::clone(&self.balances),
        }
    }

    /// Balance credited to `account` by transfers so far.
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.read().get(account).copied().unwrap_or(0)
    }
}

impl LedgerRuntime for LocalRuntime {
    fn caller(&self) -> AccountId {
        self.caller.clone()
    }

    fn attached_deposit(&self) -> Amount {
        self.attached_deposit
    }

    fn transfer(&self, to: &AccountId, amount: Amount) -> Result<()> {
        let mut balances = self.balances.write();
        let balance = balances.entry(to.clone()).or_insert(0);
        *balance = balance.saturating_add(amount);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Mock host (for deterministic testing)
// -----------------------------------------------------------------------------

/// Recording mock host.
///
/// Captures every transfer request; can be switched into a rejecting mode
/// to exercise the post-commit transfer failure path.
#[derive(Debug)]
pub struct MockRuntime {
    caller: AccountId,
    attached_deposit: Amount,
    reject_transfers: bool,
    transfer_calls: RwLock<Vec<(AccountId, Amount)>>,
}

impl MockRuntime {
    /// Create a mock host for a call signed by `caller`.
    pub fn new(caller: AccountId) -> Self {
        Self {
            caller,
            attached_deposit: 0,
            reject_transfers: false,
            transfer_calls: RwLock::new(Vec::new()),
        }
    }

    /// Attach a deposit to the call.
    pub fn with_deposit(mut self, amount: Amount) -> Self {
        self.attached_deposit = amount;
        self
    }

    /// Make every transfer request fail.
    pub fn rejecting_transfers(mut self) -> Self {
        self.reject_transfers = true;
        self
    }

    /// Transfer requests observed so far.
    pub fn transfer_calls(&self) -> Vec<(AccountId, Amount)> {
        self.transfer_calls.read().clone()
    }

    /// Forget recorded transfer requests.
    pub fn clear_calls(&self) {
        self.transfer_calls.write().clear();
    }
}

impl LedgerRuntime for MockRuntime {
    fn caller(&self) -> AccountId {
        self.caller.clone()
    }

    fn attached_deposit(&self) -> Amount {
        self.attached_deposit
    }

    fn transfer(&self, to: &AccountId, amount: Amount) -> Result<()> {
        self.transfer_calls.write().push((to.clone(), amount));
        if self.reject_transfers {
            return Err(anyhow::anyhow!("transfer rejected by host"));
        }
        Ok(())
    }
}
