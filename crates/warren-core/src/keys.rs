//! Backing-store key layout.
//!
//! Each logical record owns two independently expiring keys:
//! `url:<slug>` holding the target and `urlhitcount:<slug>` holding the
//! hit counter. The layout is fixed for interoperability with existing
//! data.

use crate::slug::Slug;

/// Prefix of the primary key holding the redirect target.
pub const PRIMARY_PREFIX: &str = "url:";

/// Prefix of the counter key holding the hit count.
pub const COUNTER_PREFIX: &str = "urlhitcount:";

/// Builds the primary key for a slug.
pub fn primary_key(slug: &Slug) -> String {
    format!("{PRIMARY_PREFIX}{slug}")
}

/// Builds the counter key for a slug.
pub fn counter_key(slug: &Slug) -> String {
    format!("{COUNTER_PREFIX}{slug}")
}

/// Pattern matching every primary key, for keyspace scans.
pub fn scan_pattern() -> String {
    format!("{PRIMARY_PREFIX}*")
}

/// Recovers the slug from a primary key.
///
/// Returns `None` for keys outside the primary namespace or whose tail
/// fails charset validation.
pub fn slug_from_primary_key(key: &str) -> Option<Slug> {
    let tail = key.strip_prefix(PRIMARY_PREFIX)?;
    Slug::new(tail).ok()
}
