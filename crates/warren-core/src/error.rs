use thiserror::Error;

/// Type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the record store and its callers.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Every creation attempt found its generated slug already occupied.
    #[error("slug allocation exhausted after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },
    /// The slug has no live primary key (never created, or expired).
    #[error("slug not found: {0}")]
    NotFound(String),
    /// The backing store is unreachable or returned a transport-level error.
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    /// An externally supplied slug contains characters outside the alphabet.
    #[error("invalid slug syntax: '{0}'")]
    InvalidSlug(String),
}
