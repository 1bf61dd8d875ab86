//! Record-store implementations and the operation facade.
//!
//! This crate provides the Redis-backed [`RedisRecordStore`] (the
//! production backend), an in-memory store for tests, the
//! [`SlugService`] facade consumed by transport layers, and the
//! [`SummaryAssembler`] reporting view.

pub mod memory;
pub mod redis;
pub mod service;
pub mod summary;

pub use crate::memory::InMemoryRecordStore;
pub use crate::redis::{RedisRecordStore, StoreSettings};
pub use crate::service::SlugService;
pub use crate::summary::{ServerSummary, SummaryAssembler, DEFAULT_SAMPLE_LIMIT};
