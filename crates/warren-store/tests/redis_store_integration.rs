use std::time::Duration;

use warren_core::{
    ExpiryPolicy, KeyspaceStats, RecordStore, Slug, SlugGenerator, StoreError,
};
use warren_store::{RedisRecordStore, StoreSettings};
use warren_test_infra::RedisServer;

/// Test fixture that manages a Redis container.
struct RedisFixture {
    redis: RedisServer,
}

impl RedisFixture {
    async fn start() -> Self {
        let redis = RedisServer::start()
            .await
            .expect("Failed to start Redis container");
        Self { redis }
    }

    async fn raw(&self) -> redis::aio::MultiplexedConnection {
        self.redis
            .connection()
            .await
            .expect("Failed to open Redis connection")
    }

    async fn store(&self) -> RedisRecordStore {
        RedisRecordStore::new(self.raw().await)
    }

    async fn store_with<G: SlugGenerator>(
        &self,
        generator: G,
        settings: StoreSettings,
    ) -> RedisRecordStore<G> {
        RedisRecordStore::with_generator(self.raw().await, generator, settings)
    }
}

/// Always returns the same slug, so every attempt after the first collides.
struct FixedGenerator(Slug);

impl SlugGenerator for FixedGenerator {
    fn generate(&self) -> Slug {
        self.0.clone()
    }
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let created = store.create("https://example.com").await.unwrap();
    assert_eq!(created.clicks, 0);
    assert_eq!(created.ttl, Duration::from_secs(3600));

    let read = store.get(&created.slug).await.unwrap();
    assert_eq!(read.target, "https://example.com");
    assert_eq!(read.clicks, 0);
    assert!(read.ttl > Duration::from_secs(3590));
    assert!(read.ttl <= Duration::from_secs(3600));
}

#[tokio::test]
async fn key_layout_is_preserved() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let created = store.create("https://example.com/layout").await.unwrap();

    let mut raw = fixture.raw().await;
    let stored: Option<String> = redis::cmd("GET")
        .arg(format!("url:{}", created.slug))
        .query_async(&mut raw)
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some("https://example.com/layout"));
}

#[tokio::test]
async fn get_missing_slug_is_not_found() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let err = store
        .get(&Slug::new("abcd1234").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn inspection_reads_are_side_effect_free() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let created = store.create("https://example.com").await.unwrap();
    store.get(&created.slug).await.unwrap();
    store.get(&created.slug).await.unwrap();

    // The counter key must not have been created by reads.
    let mut raw = fixture.raw().await;
    let counter: Option<i64> = redis::cmd("GET")
        .arg(format!("urlhitcount:{}", created.slug))
        .query_async(&mut raw)
        .await
        .unwrap();
    assert_eq!(counter, None);
    assert_eq!(store.get(&created.slug).await.unwrap().clicks, 0);
}

#[tokio::test]
async fn concurrent_hits_count_exactly() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let created = store.create("https://example.com").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = store.clone();
        let slug = created.slug.clone();
        handles.push(tokio::spawn(
            async move { store.record_hit(&slug).await },
        ));
    }

    let mut counts = Vec::new();
    for handle in handles {
        counts.push(handle.await.unwrap().unwrap());
    }
    counts.sort_unstable();

    // Strictly increasing, gap-free sequence with no lost updates.
    assert_eq!(counts, (1..=20).collect::<Vec<u64>>());
    assert_eq!(store.get(&created.slug).await.unwrap().clicks, 20);
}

#[tokio::test]
async fn colliding_creation_never_overwrites_and_exhausts() {
    let fixture = RedisFixture::start().await;
    let store = fixture
        .store_with(
            FixedGenerator(Slug::new("aaaa1111").unwrap()),
            StoreSettings::default(),
        )
        .await;

    let first = store.create("https://one.example").await.unwrap();
    assert_eq!(first.slug.as_str(), "aaaa1111");

    // Every retry generates the same occupied slug.
    let err = store.create("https://two.example").await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::AllocationExhausted { attempts: 10 }
    ));

    let kept = store.get(&first.slug).await.unwrap();
    assert_eq!(kept.target, "https://one.example");
}

#[tokio::test]
async fn record_hit_refreshes_both_ttls() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let created = store.create("https://example.com").await.unwrap();

    // Shrink the primary key's remaining life, then record a hit.
    let mut raw = fixture.raw().await;
    let _: bool = redis::cmd("EXPIRE")
        .arg(format!("url:{}", created.slug))
        .arg(5)
        .query_async(&mut raw)
        .await
        .unwrap();
    assert!(store.get(&created.slug).await.unwrap().ttl <= Duration::from_secs(5));

    store.record_hit(&created.slug).await.unwrap();

    // Both keys are back to the full window.
    let read = store.get(&created.slug).await.unwrap();
    assert!(read.ttl > Duration::from_secs(3590));

    let counter_ttl: i64 = redis::cmd("TTL")
        .arg(format!("urlhitcount:{}", created.slug))
        .query_async(&mut raw)
        .await
        .unwrap();
    assert!(counter_ttl > 3590);
}

#[tokio::test]
async fn unused_record_expires_after_one_window() {
    let fixture = RedisFixture::start().await;
    let settings = StoreSettings::builder()
        .expiry(ExpiryPolicy::new(Duration::from_secs(1)))
        .build();
    let store = fixture
        .store_with(warren_core::RandomSlugGenerator::new(), settings)
        .await;

    let created = store.create("https://example.com").await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let err = store.get(&created.slug).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn elapsed_deadline_surfaces_unavailable() {
    let fixture = RedisFixture::start().await;
    let settings = StoreSettings::builder().op_timeout(Duration::ZERO).build();
    let store = fixture
        .store_with(warren_core::RandomSlugGenerator::new(), settings)
        .await;

    // A zero deadline elapses before any round trip can complete, so
    // every operation aborts promptly instead of hanging on the socket.
    let started = std::time::Instant::now();
    let err = store
        .get(&Slug::new("abcd1234").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(started.elapsed() < Duration::from_millis(500));

    let err = store.create("https://example.com").await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[tokio::test]
async fn enumerate_on_empty_keyspace_is_empty() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    assert!(store.enumerate(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn enumerate_returns_bounded_live_sample() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    let mut targets = Vec::new();
    for i in 0..5 {
        let created = store
            .create(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        targets.push((created.slug, created.target));
    }

    let sample = store.enumerate(10).await.unwrap();
    assert!(!sample.is_empty());
    assert!(sample.len() <= 5);
    for record in &sample {
        assert!(targets
            .iter()
            .any(|(slug, target)| slug == &record.slug && target == &record.target));
    }

    let bounded = store.enumerate(2).await.unwrap();
    assert!(bounded.len() <= 2);

    // A zero limit never reaches the server; SCAN rejects COUNT 0.
    assert!(store.enumerate(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn keyspace_info_reflects_live_keys() {
    let fixture = RedisFixture::start().await;
    let store = fixture.store().await;

    store.create("https://example.com").await.unwrap();

    let info = store.keyspace_info().await.unwrap();
    assert!(info.contains("db0"), "unexpected INFO payload: {info}");
}
