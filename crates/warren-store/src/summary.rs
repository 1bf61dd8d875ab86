use serde::Serialize;
use std::sync::Arc;
use warren_core::{KeyspaceStats, RecordStore, Result, ShortUrl};

/// Default number of records sampled for the summary view.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// Reporting view over the store: a bounded sample of live records plus
/// the backing store's own keyspace statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSummary {
    pub known_slugs: Vec<ShortUrl>,
    pub keyspace_info: String,
}

/// Assembles [`ServerSummary`] values. Pure composition over
/// [`RecordStore::enumerate`] and [`KeyspaceStats::keyspace_info`];
/// the sample is best-effort and not guaranteed complete.
#[derive(Debug, Clone)]
pub struct SummaryAssembler<S> {
    store: Arc<S>,
    sample_limit: usize,
}

impl<S: RecordStore + KeyspaceStats> SummaryAssembler<S> {
    pub fn new(store: S) -> Self {
        Self::with_sample_limit(store, DEFAULT_SAMPLE_LIMIT)
    }

    pub fn with_sample_limit(store: S, sample_limit: usize) -> Self {
        Self {
            store: Arc::new(store),
            sample_limit,
        }
    }

    pub async fn assemble(&self) -> Result<ServerSummary> {
        let known_slugs = self.store.enumerate(self.sample_limit).await?;
        let keyspace_info = self.store.keyspace_info().await?;
        Ok(ServerSummary {
            known_slugs,
            keyspace_info,
        })
    }
}
