use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::{SignedDuration, Timestamp};
use std::sync::Arc;
use std::time::Duration;
use warren_core::{
    ExpiryPolicy, KeyspaceStats, RandomSlugGenerator, RecordStore, Result, ShortUrl, Slug,
    SlugGenerator, StoreError, MAX_CREATE_ATTEMPTS,
};

/// An expiring value in the in-memory keyspace.
#[derive(Debug, Clone)]
struct Expiring<T> {
    value: T,
    expire_at: Timestamp,
}

impl<T> Expiring<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expire_at: expire_at_for(ttl),
        }
    }

    fn is_expired(&self) -> bool {
        Timestamp::now() >= self.expire_at
    }

    fn remaining_ttl(&self) -> Duration {
        let left = self.expire_at.duration_since(Timestamp::now());
        Duration::try_from(left).unwrap_or(Duration::ZERO)
    }
}

fn expire_at_for(ttl: Duration) -> Timestamp {
    let span = SignedDuration::try_from(ttl).unwrap_or(SignedDuration::MAX);
    Timestamp::now()
        .saturating_add(span)
        .expect("saturating_add cannot fail for a SignedDuration")
}

/// In-memory implementation of [`RecordStore`] mirroring the two-key
/// namespace of the Redis backend: targets and counters live in separate
/// maps with independent expiry. Intended for unit tests.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore<G = RandomSlugGenerator> {
    targets: Arc<DashMap<String, Expiring<String>>>,
    counters: Arc<DashMap<String, Expiring<u64>>>,
    generator: Arc<G>,
    expiry: ExpiryPolicy,
}

impl InMemoryRecordStore<RandomSlugGenerator> {
    pub fn new() -> Self {
        Self::with_generator(RandomSlugGenerator::new(), ExpiryPolicy::default())
    }
}

impl Default for InMemoryRecordStore<RandomSlugGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: SlugGenerator> InMemoryRecordStore<G> {
    pub fn with_generator(generator: G, expiry: ExpiryPolicy) -> Self {
        Self {
            targets: Arc::new(DashMap::new()),
            counters: Arc::new(DashMap::new()),
            generator: Arc::new(generator),
            expiry,
        }
    }

    /// Set-if-absent over the target map. Expired entries count as absent.
    fn try_insert(&self, slug: &Slug, target: &str) -> bool {
        let ttl = self.expiry.default_ttl();
        match self.targets.entry(slug.as_str().to_owned()) {
            Entry::Occupied(mut occupied) if occupied.get().is_expired() => {
                occupied.insert(Expiring::new(target.to_owned(), ttl));
                true
            }
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(Expiring::new(target.to_owned(), ttl));
                true
            }
        }
    }

    fn live_clicks(&self, slug: &Slug) -> u64 {
        self.counters
            .get(slug.as_str())
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value)
            .unwrap_or(0)
    }
}

#[async_trait]
impl<G: SlugGenerator> RecordStore for InMemoryRecordStore<G> {
    async fn create(&self, target: &str) -> Result<ShortUrl> {
        for _ in 0..MAX_CREATE_ATTEMPTS {
            let slug = self.generator.generate();
            if self.try_insert(&slug, target) {
                return Ok(ShortUrl {
                    slug,
                    target: target.to_owned(),
                    clicks: 0,
                    ttl: self.expiry.default_ttl(),
                });
            }
        }
        Err(StoreError::AllocationExhausted {
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    async fn get(&self, slug: &Slug) -> Result<ShortUrl> {
        let Some(entry) = self.targets.get(slug.as_str()) else {
            return Err(StoreError::NotFound(slug.to_string()));
        };
        if entry.is_expired() {
            drop(entry);
            self.targets.remove(slug.as_str());
            return Err(StoreError::NotFound(slug.to_string()));
        }

        Ok(ShortUrl {
            slug: slug.clone(),
            target: entry.value.clone(),
            clicks: self.live_clicks(slug),
            ttl: entry.remaining_ttl(),
        })
    }

    async fn record_hit(&self, slug: &Slug) -> Result<u64> {
        let ttl = self.expiry.default_ttl();

        let clicks = {
            let mut entry = self
                .counters
                .entry(slug.as_str().to_owned())
                .or_insert_with(|| Expiring::new(0, ttl));
            if entry.is_expired() {
                entry.value = 0;
            }
            entry.value += 1;
            entry.expire_at = expire_at_for(ttl);
            entry.value
        };

        if let Some(mut entry) = self.targets.get_mut(slug.as_str()) {
            entry.expire_at = expire_at_for(ttl);
        }

        Ok(clicks)
    }

    async fn enumerate(&self, sample_limit: usize) -> Result<Vec<ShortUrl>> {
        let slugs: Vec<Slug> = self
            .targets
            .iter()
            .take(sample_limit)
            .map(|entry| Slug::new_unchecked(entry.key().clone()))
            .collect();

        let mut records = Vec::new();
        for slug in slugs {
            match self.get(&slug).await {
                Ok(record) => records.push(record),
                Err(_) => continue,
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl<G: SlugGenerator> KeyspaceStats for InMemoryRecordStore<G> {
    async fn keyspace_info(&self) -> Result<String> {
        Ok(format!(
            "keys={},counters={}",
            self.targets.len(),
            self.counters.len()
        ))
    }
}
