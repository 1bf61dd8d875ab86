use std::sync::Arc;
use tracing::debug;
use warren_core::{RecordStore, Result, ShortUrl, Slug};

/// The operation facade exposed to transport layers.
///
/// Slug arguments are the validated [`Slug`] type; callers holding raw
/// user input must go through [`Slug::new`] first, which is what keeps
/// foreign characters out of the store's keyspace.
#[derive(Debug, Clone)]
pub struct SlugService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> SlugService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Allocates a new slug for `target`.
    pub async fn create_slug(&self, target: &str) -> Result<ShortUrl> {
        self.store.create(target).await
    }

    /// The redirect path: records the hit (extending both keys back to
    /// the full TTL window) and returns the target plus the new count.
    pub async fn resolve_slug(&self, slug: &Slug) -> Result<(String, u64)> {
        let record = self.store.get(slug).await?;
        let clicks = self.store.record_hit(slug).await?;
        debug!(slug = %slug, clicks, "resolved slug");
        Ok((record.target, clicks))
    }

    /// Side-effect-free detail view.
    pub async fn inspect_slug(&self, slug: &Slug) -> Result<ShortUrl> {
        self.store.get(slug).await
    }

    /// Best-effort sample of live records.
    pub async fn list_sample(&self, limit: usize) -> Result<Vec<ShortUrl>> {
        self.store.enumerate(limit).await
    }
}
