use serde::{Deserialize, Serialize};
use warren_core::ShortUrl;
use warren_store::ServerSummary;

#[derive(Debug, Deserialize)]
pub struct CreateSlugForm {
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
    pub target: String,
    pub clicks: u64,
    pub ttl_secs: u64,
}

impl From<ShortUrl> for SlugResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            slug: record.slug.to_string(),
            target: record.target,
            clicks: record.clicks,
            ttl_secs: record.ttl.as_secs(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub known_slugs: Vec<SlugResponse>,
    pub keyspace_info: String,
}

impl From<ServerSummary> for SummaryResponse {
    fn from(summary: ServerSummary) -> Self {
        Self {
            known_slugs: summary
                .known_slugs
                .into_iter()
                .map(SlugResponse::from)
                .collect(),
            keyspace_info: summary.keyspace_info,
        }
    }
}
