use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use warren_core::{KeyspaceStats, RecordStore, Slug};

use crate::error::Result;
use crate::model::{CreateSlugForm, SlugResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    /// Present (with any value) to request the side-effect-free detail
    /// view instead of a counted redirect.
    pub details: Option<String>,
}

/// `GET /{slug}`: counted redirect, or detail view with `?details`.
pub async fn resolve_handler<S>(
    Path(slug): Path<String>,
    Query(query): Query<ResolveQuery>,
    State(state): State<AppState<S>>,
) -> Result<Response>
where
    S: RecordStore + KeyspaceStats + Clone,
{
    // Externally supplied slugs never reach the store unvalidated.
    let slug = Slug::new(slug)?;

    if query.details.is_some() {
        let record = state.service().inspect_slug(&slug).await?;
        return Ok(Json(SlugResponse::from(record)).into_response());
    }

    let (target, _clicks) = state.service().resolve_slug(&slug).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

/// `POST /_create`: allocates a slug for the submitted target.
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<CreateSlugForm>,
) -> Result<(StatusCode, Json<SlugResponse>)>
where
    S: RecordStore + KeyspaceStats + Clone,
{
    let record = state.service().create_slug(&form.target).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}
