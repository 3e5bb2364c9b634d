//! Error types for the participant registry

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("age must be greater than zero")]
    InvalidAge,

    #[error("name must contain 3 or more characters")]
    InvalidName,

    #[error("a registration fee of at least 1 token is required")]
    InsufficientPayment,

    #[error("caller is not authorized to certify participants")]
    Unauthorized,

    #[error("registry storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
