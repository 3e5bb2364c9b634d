use crate::account::AccountId;
use serde::{Deserialize, Serialize};

/// One registered program enrollee, keyed in the registry by `account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Identifier of the registering caller. Immutable once set.
    pub account: AccountId,
    /// Display name, at least 3 characters.
    pub name: String,
    /// Age in years, strictly positive.
    pub age: u64,
    /// Certification flag. Starts `false`, flips to `true` at most once.
    pub certified: bool,
}

impl Participant {
    /// Create a fresh, uncertified participant record.
    pub fn new(account: AccountId, name: impl Into<String>, age: u64) -> Self {
        Self {
            account,
            name: name.into(),
            age,
            certified: false,
        }
    }
}
