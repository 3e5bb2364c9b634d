//! Participant registry contract core.
//!
//! Records program participants, validates their enrollment, and lets a
//! single configured admin account certify a participant and trigger a
//! reward payout. The surrounding ledger host (caller identity, attached
//! deposit, value transfer) is reached through the [`LedgerRuntime`] trait;
//! durable state lives behind [`RegistryStore`].

pub mod config;
pub mod errors;
pub mod registry;
pub mod runtime;
pub mod store;

pub use config::RegistryConfig;
pub use errors::*;
pub use registry::ProgramRegistry;
pub use runtime::{LedgerRuntime, LocalRuntime, MockRuntime};
pub use store::{MemoryStore, RegistryStore, SledStore};
