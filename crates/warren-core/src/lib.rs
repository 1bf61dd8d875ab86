//! Core types and traits for the warren slug store.
//!
//! This crate defines the slug alphabet and generator, the `ShortUrl`
//! record, the backing-store key layout, the expiry policy, and the
//! `RecordStore` trait implemented by the storage backends in
//! `warren-store`.

pub mod error;
pub mod expiry;
pub mod generator;
pub mod keys;
pub mod record;
pub mod slug;
pub mod store;

pub use error::{Result, StoreError};
pub use expiry::{ExpiryPolicy, DEFAULT_TTL};
pub use generator::{RandomSlugGenerator, SlugGenerator};
pub use record::ShortUrl;
pub use slug::{Slug, ALPHABET, SLUG_LENGTH};
pub use store::{KeyspaceStats, RecordStore, MAX_CREATE_ATTEMPTS};
