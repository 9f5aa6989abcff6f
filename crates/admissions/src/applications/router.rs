use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{ApplicationId, ApplicationPatch};
use super::pagination::PageParams;
use super::service::{AdmissionsService, ApplicationServiceError};
use super::store::ApplicationRepository;

/// Router builder exposing the metrics, list, lookup, and update endpoints.
pub fn application_router<R>(service: Arc<AdmissionsService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/metrics/admissions", get(metrics_handler::<R>))
        .route("/api/metrics", get(metrics_handler::<R>))
        .route("/applications", get(list_handler::<R>))
        .route("/api/applications", get(list_handler::<R>))
        .route(
            "/api/applications/:application_id",
            get(detail_handler::<R>).put(update_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn metrics_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.metrics().await {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
    Query(params): Query<PageParams>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.list(params.into()).await {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id).await {
        Ok(lookup) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, lookup.cache.header_value())],
            axum::Json(lookup.record),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<AdmissionsService<R>>>,
    Path(application_id): Path<String>,
    axum::Json(patch): axum::Json<ApplicationPatch>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.update(ApplicationId(application_id), patch).await {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ApplicationServiceError) -> Response {
    let (status, message) = match &err {
        ApplicationServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found".to_string()),
        ApplicationServiceError::InvalidPage { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        ApplicationServiceError::Repository(_) | ApplicationServiceError::Interrupted(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    };
    (status, axum::Json(json!({ "error": message }))).into_response()
}
