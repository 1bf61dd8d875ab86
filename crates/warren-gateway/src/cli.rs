use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "WARREN_LISTEN_ADDR";
pub const REDIS_URL_ENV: &str = "WARREN_REDIS_URL";
pub const DEFAULT_TTL_ENV: &str = "WARREN_DEFAULT_TTL_SECS";
pub const SAMPLE_LIMIT_ENV: &str = "WARREN_SAMPLE_LIMIT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Parser)]
#[command(name = "warren")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = REDIS_URL_ENV, default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    /// Default record lifetime in seconds; every recorded hit resets
    /// both keys back to this window.
    #[arg(long, env = DEFAULT_TTL_ENV, default_value_t = 3600)]
    pub default_ttl_secs: u64,

    /// Number of records sampled for the summary view.
    #[arg(long, env = SAMPLE_LIMIT_ENV, default_value_t = 10)]
    pub sample_limit: usize,
}
