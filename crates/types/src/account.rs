use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing an account identifier string.
#[derive(Debug, Error)]
pub enum AccountIdError {
    #[error("account id must be between {min} and {max} characters, got {actual}")]
    InvalidLength { min: usize, max: usize, actual: usize },
    #[error("account id contains invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("account id separators must divide non-empty parts")]
    EmptyPart,
}

/// Minimum length of an account identifier.
pub const ACCOUNT_ID_MIN_LENGTH: usize = 2;
/// Maximum length of an account identifier.
pub const ACCOUNT_ID_MAX_LENGTH: usize = 64;

/// Human-readable account identifier, e.g. `alice.program`.
///
/// Doubles as the registry store key, so the string form is the canonical
/// representation throughout the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account id from a trusted string without validation.
    ///
    /// Host-supplied caller identities are taken on faith; untrusted input
    /// should go through [`FromStr`] instead.
    pub fn new(account: impl Into<String>) -> Self {
        Self(account.into())
    }

    /// Get the account id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate the account id format.
    ///
    /// Lowercase alphanumeric parts separated by `.`, `-`, or `_`, within
    /// the overall length bounds.
    pub fn validate(s: &str) -> Result<(), AccountIdError> {
        if s.len() < ACCOUNT_ID_MIN_LENGTH || s.len() > ACCOUNT_ID_MAX_LENGTH {
            return Err(AccountIdError::InvalidLength {
                min: ACCOUNT_ID_MIN_LENGTH,
                max: ACCOUNT_ID_MAX_LENGTH,
                actual: s.len(),
            });
        }

        let mut prev_separator = true;
        for c in s.chars() {
            match c {
                'a'..='z' | '0'..='9' => prev_separator = false,
                '.' | '-' | '_' => {
                    if prev_separator {
                        return Err(AccountIdError::EmptyPart);
                    }
                    prev_separator = true;
                }
                other => return Err(AccountIdError::InvalidCharacter(other)),
            }
        }
        if prev_separator {
            return Err(AccountIdError::EmptyPart);
        }

        Ok(())
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids() {
        assert!(AccountId::validate("alice.program").is_ok());
        assert!(AccountId::validate("node-7_a.main").is_ok());
        assert!(AccountId::validate("ab").is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(matches!(
            AccountId::validate("a"),
            Err(AccountIdError::InvalidLength { .. })
        ));
        let long = "a".repeat(ACCOUNT_ID_MAX_LENGTH + 1);
        assert!(matches!(
            AccountId::validate(&long),
            Err(AccountIdError::InvalidLength { .. })
        ));
    }

    #[test]
    fn rejects_bad_characters_and_dangling_separators() {
        assert!(matches!(
            AccountId::validate("Alice"),
            Err(AccountIdError::InvalidCharacter('A'))
        ));
        assert!(matches!(
            AccountId::validate(".alice"),
            Err(AccountIdError::EmptyPart)
        ));
        assert!(matches!(
            AccountId::validate("alice."),
            Err(AccountIdError::EmptyPart)
        ));
        assert!(matches!(
            AccountId::validate("al..ice"),
            Err(AccountIdError::EmptyPart)
        ));
    }

    #[test]
    fn parses_and_displays_round_trip() {
        let id: AccountId = "alice.program".parse().unwrap();
        assert_eq!(id.as_str(), "alice.program");
        assert_eq!(id.to_string(), "alice.program");
    }
}
