use std::result::Result as StdResult;
use thiserror::Error;

/// Failure to bring up or reach a containerized backing store.
///
/// Fixtures surface these instead of panicking so tests decide how to
/// report a broken container environment.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("container error: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

pub type Result<T> = StdResult<T, TestInfraError>;
