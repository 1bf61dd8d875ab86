mod cli;

use crate::cli::Cli;
use clap::Parser;
use std::time::Duration;
use tracing::info;
use warren_core::{ExpiryPolicy, RandomSlugGenerator};
use warren_gateway::{app, AppState};
use warren_store::{RedisRecordStore, StoreSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Cli::try_parse()?;

    info!(
        redis_url = %config.redis_url,
        default_ttl_secs = config.default_ttl_secs,
        "connecting to backing store"
    );
    let client = redis::Client::open(config.redis_url.as_str())?;
    let conn = client.get_multiplexed_async_connection().await?;

    let settings = StoreSettings::builder()
        .expiry(ExpiryPolicy::new(Duration::from_secs(config.default_ttl_secs)))
        .build();
    let store = RedisRecordStore::with_generator(conn, RandomSlugGenerator::new(), settings);
    let state = AppState::with_sample_limit(store, config.sample_limit);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting warren http server");
    axum::serve(listener, app::router(state)).await?;

    Ok(())
}
