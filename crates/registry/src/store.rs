//! Durable participant storage
//!
//! One named collection keyed by account identifier. The ledger host owns
//! durability and call-level atomicity; the store itself only needs
//! get/set/list. Iteration order is whatever the backend yields and callers
//! must not depend on it.

use crate::errors::{RegistryError, Result};
use credence_types::{AccountId, Participant};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;

/// Abstract participant store.
pub trait RegistryStore: Send + Sync {
    /// Look up the participant registered under `account`.
    fn get(&self, account: &AccountId) -> Result<Option<Participant>>;

    /// Insert or overwrite the record keyed by its `account` field.
    fn set(&self, participant: Participant) -> Result<()>;

    /// Materialize every stored participant.
    fn list(&self) -> Result<Vec<Participant>>;
}

impl<S: RegistryStore + ?Sized> RegistryStore for std::sync::Arc<S> {
    fn get(&self, account: &AccountId) -> Result<Option<Participant>> {
        (**self).get(account)
    }

    fn set(&self, participant: Participant) -> Result<()> {
        (**self).set(participant)
    }

    fn list(&self) -> Result<Vec<Participant>> {
        (**self).list()
    }
}

/// In-memory implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: RwLock<HashMap<AccountId, Participant>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryStore for MemoryStore {
    fn get(&self, account: &AccountId) -> Result<Option<Participant>> {
        Ok(self.participants.read().get(account).cloned())
    }

    fn set(&self, participant: Participant) -> Result<()> {
        self.participants
            .write()
            .insert(participant.account.clone(), participant);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Participant>> {
        Ok(self.participants.read().values().cloned().collect())
    }
}

/// Sled-backed implementation: one `participants` tree, JSON values.
pub struct SledStore {
    db: sled::Db,
    participants: sled::Tree,
}

impl SledStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path).map_err(anyhow::Error::from)?;
        let participants = db.open_tree("participants").map_err(anyhow::Error::from)?;
        Ok(Self { db, participants })
    }

    pub fn flush(&self) -> Result<()> {
        self.db.flush().map_err(anyhow::Error::from)?;
        Ok(())
    }
}

impl RegistryStore for SledStore {
    fn get(&self, account: &AccountId) -> Result<Option<Participant>> {
        self.participants
            .get(account.as_str().as_bytes())
            .map_err(anyhow::Error::from)?
            .map(|v| serde_json::from_slice(&v))
            .transpose()
            .map_err(RegistryError::from)
    }

    fn set(&self, participant: Participant) -> Result<()> {
        let data = serde_json::to_vec(&participant)?;
        self.participants
            .insert(participant.account.as_str().as_bytes(), data)
            .map_err(anyhow::Error::from)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Participant>> {
        let mut participants = Vec::new();
        for item in self.participants.iter() {
            let (_, value) = item.map_err(anyhow::Error::from)?;
            participants.push(serde_json::from_slice(&value)?);
        }
        Ok(participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(account: &str, name: &str, age: u64) -> Participant {
        Participant::new(AccountId::new(account), name, age)
    }

    #[test]
    fn memory_store_get_set_list() {
        let store = MemoryStore::new();
        let alice = AccountId::new("alice.program");

        assert!(store.get(&alice).unwrap().is_none());

        store.set(participant("alice.program", "Alice", 20)).unwrap();
        store.set(participant("bob.program", "Bob", 30)).unwrap();

        assert_eq!(store.get(&alice).unwrap().unwrap().name, "Alice");
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn memory_store_set_overwrites() {
        let store = MemoryStore::new();
        let alice = AccountId::new("alice.program");

        store.set(participant("alice.program", "Alice", 20)).unwrap();
        store.set(participant("alice.program", "Alicia", 21)).unwrap();

        let stored = store.get(&alice).unwrap().unwrap();
        assert_eq!(stored.name, "Alicia");
        assert_eq!(stored.age, 21);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn sled_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(dir.path()).unwrap();
        let alice = AccountId::new("alice.program");

        assert!(store.get(&alice).unwrap().is_none());

        store.set(participant("alice.program", "Alice", 20)).unwrap();
        let stored = store.get(&alice).unwrap().unwrap();
        assert_eq!(stored.name, "Alice");
        assert!(!stored.certified);
    }

    #[test]
    fn sled_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let alice = AccountId::new("alice.program");

        {
            let store = SledStore::open(dir.path()).unwrap();
            store.set(participant("alice.program", "Alice", 20)).unwrap();
            store.flush().unwrap();
        }

        let store = SledStore::open(dir.path()).unwrap();
        assert_eq!(store.get(&alice).unwrap().unwrap().name, "Alice");
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
