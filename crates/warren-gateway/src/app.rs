use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use warren_core::{KeyspaceStats, RecordStore};

use crate::handlers::{create_handler, resolve_handler, summary_handler};
use crate::state::AppState;

pub fn router<S>(state: AppState<S>) -> Router
where
    S: RecordStore + KeyspaceStats + Clone,
{
    Router::new()
        .route("/", get(summary_handler::<S>))
        .route("/_create", post(create_handler::<S>))
        .route("/{slug}", get(resolve_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
