use std::time::Duration;

/// Default record lifetime: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Sliding-expiration policy for stored records.
///
/// The single tunable of the system: records are created with this TTL,
/// and every recorded hit refreshes both keys back to the full window.
/// Active records therefore persist indefinitely; unused ones die after
/// one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    default_ttl: Duration,
}

impl ExpiryPolicy {
    pub fn new(default_ttl: Duration) -> Self {
        Self { default_ttl }
    }

    /// The TTL applied at creation and at every hit-refresh.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
