//! Registry configuration
//!
//! The admin identity and the fee/reward amounts are parameters of the
//! contract instance rather than hard-coded constants, so deployments and
//! tests can substitute their own values.

use anyhow::Context;
use credence_types::{tokens, AccountId, Amount};
use serde::Deserialize;
use std::path::Path;

/// Default registration fee: 1 whole token.
pub const DEFAULT_REGISTRATION_FEE: Amount = tokens(1);

/// Default certification reward: 5 whole tokens.
pub const DEFAULT_CERTIFICATION_REWARD: Amount = tokens(5);

/// Parameters of one registry contract instance.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// The single account authorized to certify participants.
    pub admin: AccountId,
    /// Minimum deposit that must accompany a registration call.
    pub registration_fee: Amount,
    /// Amount transferred to a participant upon certification.
    pub certification_reward: Amount,
}

impl RegistryConfig {
    /// Create a config with the given admin and default fee/reward amounts.
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            certification_reward: DEFAULT_CERTIFICATION_REWARD,
        }
    }

    /// Create a config with explicit fee and reward amounts.
    pub fn with_amounts(
        admin: AccountId,
        registration_fee: Amount,
        certification_reward: Amount,
    ) -> Self {
        Self {
            admin,
            registration_fee,
            certification_reward,
        }
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let file: RegistryConfigFile = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        file.try_into()
    }
}

/// On-disk TOML form of [`RegistryConfig`].
///
/// Amounts are given in whole tokens; atomic units do not fit TOML's
/// integer range.
#[derive(Debug, Deserialize)]
pub struct RegistryConfigFile {
    pub admin: String,
    #[serde(default = "default_fee_tokens")]
    pub registration_fee_tokens: u64,
    #[serde(default = "default_reward_tokens")]
    pub certification_reward_tokens: u64,
}

fn default_fee_tokens() -> u64 {
    1
}

fn default_reward_tokens() -> u64 {
    5
}

impl TryFrom<RegistryConfigFile> for RegistryConfig {
    type Error = anyhow::Error;

    fn try_from(file: RegistryConfigFile) -> anyhow::Result<Self> {
        let admin: AccountId = file
            .admin
            .parse()
            .with_context(|| format!("invalid admin account id '{}'", file.admin))?;
        Ok(Self::with_amounts(
            admin,
            tokens(file.registration_fee_tokens),
            tokens(file.certification_reward_tokens),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credence_types::ONE_TOKEN;

    #[test]
    fn defaults_are_one_and_five_tokens() {
        let config = RegistryConfig::new(AccountId::new("admin.program"));
        assert_eq!(config.registration_fee, ONE_TOKEN);
        assert_eq!(config.certification_reward, 5 * ONE_TOKEN);
    }

    #[test]
    fn toml_defaults_amounts_when_omitted() {
        let file: RegistryConfigFile = toml::from_str(r#"admin = "admin.program""#).unwrap();
        let config: RegistryConfig = file.try_into().unwrap();
        assert_eq!(config.admin.as_str(), "admin.program");
        assert_eq!(config.registration_fee, DEFAULT_REGISTRATION_FEE);
        assert_eq!(config.certification_reward, DEFAULT_CERTIFICATION_REWARD);
    }

    #[test]
    fn toml_rejects_malformed_admin() {
        let file: RegistryConfigFile = toml::from_str(r#"admin = "NOT VALID""#).unwrap();
        assert!(RegistryConfig::try_from(file).is_err());
    }

    #[test]
    fn toml_accepts_explicit_amounts() {
        let file: RegistryConfigFile = toml::from_str(
            r#"
            admin = "admin.program"
            registration_fee_tokens = 2
            certification_reward_tokens = 10
            "#,
        )
        .unwrap();
        let config: RegistryConfig = file.try_into().unwrap();
        assert_eq!(config.registration_fee, tokens(2));
        assert_eq!(config.certification_reward, tokens(10));
    }
}
