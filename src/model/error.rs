use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("invalid rating domain: minimum {min} exceeds maximum {max}")]
    InvalidDomain { min: i32, max: i32 },

    #[error("rating domain [{min}, {max}] is wider than {limit} values")]
    DomainTooWide { min: i32, max: i32, limit: usize }
}
