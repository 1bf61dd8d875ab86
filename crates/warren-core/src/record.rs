use crate::slug::Slug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A stored slug-to-target mapping together with its usage stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    /// The slug identifying this record.
    pub slug: Slug,
    /// The redirect destination. Arbitrary string, no format validation.
    pub target: String,
    /// Number of recorded resolutions. Monotonically non-decreasing over
    /// the record's life; an absent counter reads as zero.
    pub clicks: u64,
    /// Remaining time until the backing store purges the primary key.
    pub ttl: Duration,
}
