use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The closed slug alphabet: ASCII alphanumerics minus the visually
/// ambiguous `i`, `o`, `I`, `O`.
pub const ALPHABET: &[u8] = b"abcdefghjklmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ1234567890";

/// Length of every generated slug.
pub const SLUG_LENGTH: usize = 8;

/// A validated slug identifying a stored target.
///
/// Validation is charset-only: every character must be a member of
/// [`ALPHABET`]. Length is deliberately not checked, so an externally
/// supplied slug of unusual length is still looked up (and simply misses).
/// The charset check is what keeps foreign characters, in particular the
/// key-namespace separator `:`, out of the backing store's keyspace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a `Slug` after validating the input against [`ALPHABET`].
    pub fn new(candidate: impl Into<String>) -> Result<Self, StoreError> {
        let candidate = candidate.into();
        if !Self::is_valid(&candidate) {
            return Err(StoreError::InvalidSlug(candidate));
        }
        Ok(Self(candidate))
    }

    /// Creates a `Slug` without validation.
    ///
    /// Use this only for slugs produced by trusted internal sources
    /// (the generator, or keys read back out of our own namespace).
    pub fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns true iff every character of `candidate` is in [`ALPHABET`].
    pub fn is_valid(candidate: &str) -> bool {
        candidate.bytes().all(|b| ALPHABET.contains(&b))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_excludes_ambiguous_characters() {
        for banned in [b'i', b'o', b'I', b'O'] {
            assert!(!ALPHABET.contains(&banned));
        }
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn valid_slugs() {
        assert!(Slug::new("abcd1234").is_ok());
        assert!(Slug::new("XYZxyz99").is_ok());
        // Length is not part of syntax validation.
        assert!(Slug::new("a").is_ok());
        assert!(Slug::new("a".repeat(64)).is_ok());
        assert!(Slug::new("").is_ok());
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert!(Slug::new("abc:def").is_err());
        assert!(Slug::new("url:abcd1234").is_err());
        assert!(Slug::new("abc def").is_err());
        assert!(Slug::new("abc/def").is_err());
        assert!(Slug::new("abc-def").is_err());
        assert!(Slug::new("abc_def").is_err());
        // Ambiguous characters are outside the closed set.
        assert!(Slug::new("abio").is_err());
        assert!(Slug::new("ABIO").is_err());
    }

    #[test]
    fn display_matches_input() {
        let slug = Slug::new("abcd1234").unwrap();
        assert_eq!(slug.to_string(), "abcd1234");
        assert_eq!(slug.as_str(), "abcd1234");
    }
}
