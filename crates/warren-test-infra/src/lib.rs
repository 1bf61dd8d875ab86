//! Container-backed test infrastructure for integration tests.

pub mod error;
pub mod redis;

pub use crate::error::{Result, TestInfraError};
pub use crate::redis::RedisServer;
