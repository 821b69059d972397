//! JSON handlers for the backend resource collections.
//!
//! Handlers are generic over [`Resource`]; each one is registered once per
//! domain by [`resource_routes`].

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use backoffice_core::Resource;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::{Editors, RequireRole, Staff};
use crate::state::AppState;

/// `GET|POST /{collection}` and `GET|PUT|DELETE /{collection}/{id}` for `R`.
#[must_use]
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::DOMAIN.collection());
    let item = format!("{collection}/{{id}}");

    Router::new()
        .route(&collection, get(index::<R>).post(create::<R>))
        .route(&item, get(show::<R>).put(update::<R>).delete(destroy::<R>))
}

/// List every record.
#[instrument(skip_all, fields(domain = %R::DOMAIN, principal = %auth.principal().id))]
async fn index<R: Resource>(
    State(state): State<AppState>,
    auth: RequireRole<Staff>,
) -> Result<Json<Vec<R::Record>>, AppError> {
    let records = state.api().resource::<R>().list().await?;
    Ok(Json(records))
}

/// Show one record.
#[instrument(skip_all, fields(domain = %R::DOMAIN, principal = %auth.principal().id))]
async fn show<R: Resource>(
    State(state): State<AppState>,
    auth: RequireRole<Staff>,
    Path(id): Path<R::Id>,
) -> Result<Json<R::Record>, AppError> {
    let record = state.api().resource::<R>().get(&id).await?;
    Ok(Json(record))
}

/// Create a record.
#[instrument(skip_all, fields(domain = %R::DOMAIN, principal = %auth.principal().id))]
async fn create<R: Resource>(
    State(state): State<AppState>,
    auth: RequireRole<Editors>,
    Json(input): Json<R::Input>,
) -> Result<(StatusCode, Json<R::Record>), AppError> {
    let record = state.api().resource::<R>().create(&input).await?;
    tracing::info!("Created record");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a record.
#[instrument(skip_all, fields(domain = %R::DOMAIN, principal = %auth.principal().id))]
async fn update<R: Resource>(
    State(state): State<AppState>,
    auth: RequireRole<Editors>,
    Path(id): Path<R::Id>,
    Json(input): Json<R::Input>,
) -> Result<Json<R::Record>, AppError> {
    let record = state.api().resource::<R>().update(&id, &input).await?;
    tracing::info!(id = %id.as_ref(), "Updated record");
    Ok(Json(record))
}

/// Delete a record.
#[instrument(skip_all, fields(domain = %R::DOMAIN, principal = %auth.principal().id))]
async fn destroy<R: Resource>(
    State(state): State<AppState>,
    auth: RequireRole<Editors>,
    Path(id): Path<R::Id>,
) -> Result<StatusCode, AppError> {
    state.api().resource::<R>().delete(&id).await?;
    tracing::info!(id = %id.as_ref(), "Deleted record");
    Ok(StatusCode::NO_CONTENT)
}
