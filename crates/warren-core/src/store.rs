use crate::error::Result;
use crate::record::ShortUrl;
use crate::slug::Slug;
use async_trait::async_trait;

/// Upper bound on slug-generation attempts per creation.
///
/// Collisions are astronomically unlikely under normal load; the bound
/// exists to fail fast instead of looping forever.
pub const MAX_CREATE_ATTEMPTS: u32 = 10;

/// The slug-keyed record store.
///
/// All interaction with the backing key-value store goes through these
/// four operations. Implementations must be safe for concurrent use by
/// an unbounded number of request handlers sharing one connection.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Allocates a fresh slug for `target` via atomic set-if-absent,
    /// retrying with a newly generated slug on each collision, up to
    /// [`MAX_CREATE_ATTEMPTS`] times. Fails with
    /// [`StoreError::AllocationExhausted`](crate::StoreError::AllocationExhausted)
    /// if every attempt collides. On success the record starts with zero
    /// clicks and the policy's default TTL.
    async fn create(&self, target: &str) -> Result<ShortUrl>;

    /// Side-effect-free inspection read: target, hit count (absent
    /// counter reads as zero) and remaining TTL. Fails with `NotFound`
    /// if the primary key does not exist. Does not touch the counter or
    /// the TTL.
    async fn get(&self, slug: &Slug) -> Result<ShortUrl>;

    /// Atomically increments the counter key (creating it at zero if
    /// absent) and refreshes both keys back to the default TTL window.
    /// Returns the new count.
    async fn record_hit(&self, slug: &Slug) -> Result<u64>;

    /// Best-effort bounded sample of live records from one scan pass over
    /// the primary-key namespace. At most `sample_limit` entries; the
    /// scan cursor is discarded, so this is neither exhaustive nor a
    /// uniform random sample. Entries that fail to read are skipped.
    async fn enumerate(&self, sample_limit: usize) -> Result<Vec<ShortUrl>>;
}

/// Access to the backing store's own keyspace statistics, for reporting.
#[async_trait]
pub trait KeyspaceStats: Send + Sync + 'static {
    /// Returns an opaque, human-readable keyspace statistics blob.
    async fn keyspace_info(&self) -> Result<String>;
}
