use axum::extract::State;
use axum::Json;
use warren_core::{KeyspaceStats, RecordStore};

use crate::error::Result;
use crate::model::SummaryResponse;
use crate::state::AppState;

/// `GET /`: sampled records plus the store's keyspace statistics.
pub async fn summary_handler<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<SummaryResponse>>
where
    S: RecordStore + KeyspaceStats + Clone,
{
    let summary = state.assembler().assemble().await?;
    Ok(Json(summary.into()))
}
