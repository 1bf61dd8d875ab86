use async_trait::async_trait;
use redis::AsyncCommands;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;
use warren_core::keys;
use warren_core::{
    ExpiryPolicy, KeyspaceStats, RandomSlugGenerator, RecordStore, Result, ShortUrl, Slug,
    SlugGenerator, StoreError, MAX_CREATE_ATTEMPTS,
};

/// Tunables for the Redis-backed store.
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreSettings {
    /// Expiry policy applied at creation and hit-refresh.
    #[builder(default)]
    pub expiry: ExpiryPolicy,
    /// Upper bound on how long a single store round trip may take before
    /// it is aborted and surfaced as `Unavailable`.
    #[builder(default = Duration::from_secs(2))]
    pub op_timeout: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    StoreError::Unavailable(format!("{operation}: {err}"))
}

/// Redis-backed implementation of [`RecordStore`].
///
/// All operations go through one multiplexed connection shared by every
/// in-flight request; the connection is concurrency-safe on its own, so
/// the store adds no locking. Slug uniqueness rides on Redis' atomic
/// `SET NX` and hit counting on atomic `INCR`.
#[derive(Debug, Clone)]
pub struct RedisRecordStore<G = RandomSlugGenerator> {
    conn: redis::aio::MultiplexedConnection,
    generator: Arc<G>,
    settings: StoreSettings,
}

impl RedisRecordStore<RandomSlugGenerator> {
    /// Creates a store with the random generator and default settings.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_generator(conn, RandomSlugGenerator::new(), StoreSettings::default())
    }
}

impl<G: SlugGenerator> RedisRecordStore<G> {
    /// Creates a store with a custom generator and settings.
    pub fn with_generator(
        conn: redis::aio::MultiplexedConnection,
        generator: G,
        settings: StoreSettings,
    ) -> Self {
        Self {
            conn,
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    fn ttl_secs(&self) -> u64 {
        self.settings.expiry.default_ttl().as_secs()
    }

    /// Runs one store round trip under the configured deadline.
    async fn run<T>(
        &self,
        operation: &str,
        fut: impl Future<Output = redis::RedisResult<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.settings.op_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(map_redis_error(operation, e)),
            Err(_) => Err(StoreError::Unavailable(format!(
                "{operation}: timed out after {:?}",
                self.settings.op_timeout
            ))),
        }
    }
}

#[async_trait]
impl<G: SlugGenerator> RecordStore for RedisRecordStore<G> {
    async fn create(&self, target: &str) -> Result<ShortUrl> {
        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let slug = self.generator.generate();
            let key = keys::primary_key(&slug);
            let options = redis::SetOptions::default()
                .conditional_set(redis::ExistenceCheck::NX)
                .with_expiration(redis::SetExpiry::EX(self.ttl_secs()));

            let mut conn = self.conn.clone();
            let stored: bool = self
                .run("set-if-absent on primary key", async move {
                    conn.set_options(&key, target, options).await
                })
                .await?;

            if stored {
                debug!(slug = %slug, target = %target, "created new slug");
                return Ok(ShortUrl {
                    slug,
                    target: target.to_owned(),
                    clicks: 0,
                    ttl: self.settings.expiry.default_ttl(),
                });
            }
            warn!(slug = %slug, attempt, "slug collision on create");
        }

        Err(StoreError::AllocationExhausted {
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    async fn get(&self, slug: &Slug) -> Result<ShortUrl> {
        let primary = keys::primary_key(slug);
        let counter = keys::counter_key(slug);
        trace!(slug = %slug, "reading record");

        let mut conn = self.conn.clone();
        let (target, clicks, ttl_secs): (Option<String>, Option<u64>, i64) = self
            .run("read record pipeline", async move {
                redis::pipe()
                    .get(&primary)
                    .get(&counter)
                    .ttl(&primary)
                    .query_async(&mut conn)
                    .await
            })
            .await?;

        let Some(target) = target else {
            trace!(slug = %slug, "slug not found");
            return Err(StoreError::NotFound(slug.to_string()));
        };

        Ok(ShortUrl {
            slug: slug.clone(),
            target,
            clicks: clicks.unwrap_or(0),
            // TTL replies are negative for missing or unexpiring keys.
            ttl: Duration::from_secs(ttl_secs.max(0) as u64),
        })
    }

    async fn record_hit(&self, slug: &Slug) -> Result<u64> {
        let primary = keys::primary_key(slug);
        let counter = keys::counter_key(slug);
        let ttl = self.ttl_secs() as i64;

        let mut conn = self.conn.clone();
        // MULTI/EXEC so the increment and both TTL refreshes land
        // together; a partial batch must not leave the keys with
        // divergent expiry.
        let (clicks, _, _): (u64, bool, bool) = self
            .run("record hit transaction", async move {
                redis::pipe()
                    .atomic()
                    .incr(&counter, 1u64)
                    .expire(&counter, ttl)
                    .expire(&primary, ttl)
                    .query_async(&mut conn)
                    .await
            })
            .await?;

        trace!(slug = %slug, clicks, "recorded hit");
        Ok(clicks)
    }

    async fn enumerate(&self, sample_limit: usize) -> Result<Vec<ShortUrl>> {
        // SCAN rejects COUNT 0, and a zero-sized sample is just empty.
        if sample_limit == 0 {
            return Ok(Vec::new());
        }
        let pattern = keys::scan_pattern();

        // One SCAN pass from cursor 0; the continuation cursor is
        // discarded on purpose, this is a bounded sample rather than a
        // full listing.
        let mut conn = self.conn.clone();
        let (_cursor, found): (u64, Vec<String>) = self
            .run("scan primary keyspace", async move {
                redis::cmd("SCAN")
                    .arg(0)
                    .arg("MATCH")
                    .arg(&pattern)
                    .arg("COUNT")
                    .arg(sample_limit)
                    .query_async(&mut conn)
                    .await
            })
            .await?;

        let mut records = Vec::new();
        for key in found.into_iter().take(sample_limit) {
            let Some(slug) = keys::slug_from_primary_key(&key) else {
                warn!(key = %key, "skipping unparsable key in scan");
                continue;
            };
            match self.get(&slug).await {
                Ok(record) => records.push(record),
                // Entries may expire between the scan and the read.
                Err(StoreError::NotFound(_)) => continue,
                Err(e) => {
                    warn!(slug = %slug, error = %e, "skipping unreadable entry in scan");
                    continue;
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl<G: SlugGenerator> KeyspaceStats for RedisRecordStore<G> {
    async fn keyspace_info(&self) -> Result<String> {
        let mut conn = self.conn.clone();
        self.run("keyspace info", async move {
            redis::cmd("INFO")
                .arg("keyspace")
                .query_async(&mut conn)
                .await
        })
        .await
    }
}
