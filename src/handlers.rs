// src/handlers.rs
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use poem_site_domain::model::PoemEntry;
use poem_site_domain::sort;
use poem_site_infra::FsDocumentSource;
use poem_site_shared_kernel::{ApplicationError, PoemSiteError};
use poem_site_usecase::LibraryQuery;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use crate::cookie;
use crate::server::AppState;

/// Largest recency window any surface renders (the sidebar); compact
/// surfaces ask for 3 via `?limit=`.
const MAX_RECENT: usize = 5;

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn clock_entropy() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::from(elapsed.subsec_nanos()) ^ elapsed.as_secs())
        .unwrap_or_default()
}

/// `GET /api/random-poem` — a uniformly random document path, with the
/// full listing for the client to retry against.
pub async fn random_poem(State(state): State<AppState>) -> Response {
    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);

    match query.random_path(&state.config.scan_plan(), clock_entropy()) {
        Ok((picked, available)) => Json(json!({
            "path": picked.route(),
            "total": available.len(),
            "available": available.iter().map(|p| p.route()).collect::<Vec<_>>(),
        }))
        .into_response(),
        Err(PoemSiteError::Application(ApplicationError::EmptyCorpus)) => {
            error_response(StatusCode::NOT_FOUND, "No poems found")
        }
        Err(err) => {
            error!(error = %err, "random poem scan failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to find random poem")
        }
    }
}

/// `GET /api/library` — navigation forest plus the recency panel, ordered
/// by the caller's sort preference cookie.
pub async fn library(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let option = cookie::sort_preference(&headers);
    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);

    match query.run(&state.config.scan_plan(), option) {
        Ok(view) => Json(json!({
            "sort": option.as_str(),
            "tree": view.tree,
            "recent": recent_payload(&view.entries, MAX_RECENT),
        }))
        .into_response(),
        Err(err) => {
            error!(error = %err, "library scan failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to scan poems")
        }
    }
}

/// `GET /api/recent?limit=N` — recently modified documents, newest first.
/// The projection is fixed to modified-desc regardless of the caller's
/// sort preference.
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let limit = params
        .get("limit")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(MAX_RECENT)
        .clamp(1, MAX_RECENT);

    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);

    match query.run(&state.config.scan_plan(), Default::default()) {
        Ok(view) => Json(json!({ "recent": recent_payload(&view.entries, limit) })).into_response(),
        Err(err) => {
            error!(error = %err, "recent scan failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to scan poems")
        }
    }
}

/// `GET /api/poems/{*path}` — one document by exact path match.
pub async fn poem(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "Poem not found");
    }

    let source = FsDocumentSource::new();
    let query = LibraryQuery::new(&source);

    match query.find(&state.config.scan_plan(), &segments) {
        Ok(entry) => Json(json!({
            "title": entry.meta.title,
            "path": entry.path.route(),
            "created": entry.meta.created,
            "modified": entry.meta.modified,
            "description": entry.meta.description,
            "tags": entry.meta.tags,
            "extra": entry.meta.extra,
            "body": entry.body,
        }))
        .into_response(),
        Err(PoemSiteError::Application(ApplicationError::DocumentNotFound { .. })) => {
            error_response(StatusCode::NOT_FOUND, "Poem not found")
        }
        Err(err) => {
            error!(error = %err, "poem lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to scan poems")
        }
    }
}

/// `GET /api/sort-preference` — the preference the server would render with.
pub async fn sort_preference(headers: HeaderMap) -> Response {
    Json(json!({ "sort": cookie::sort_preference(&headers).as_str() })).into_response()
}

#[derive(Debug, Deserialize)]
pub struct SetSortRequest {
    pub sort: String,
}

/// `PUT /api/sort-preference` — persist a preference for a year.
pub async fn set_sort_preference(Json(request): Json<SetSortRequest>) -> Response {
    match request.sort.parse::<poem_site_domain::SortOption>() {
        Ok(option) => (
            StatusCode::NO_CONTENT,
            [(header::SET_COOKIE, cookie::set_sort_cookie(option))],
        )
            .into_response(),
        Err(_) => error_response(StatusCode::BAD_REQUEST, "Invalid sort option"),
    }
}

fn recent_payload(entries: &[PoemEntry], limit: usize) -> Vec<Value> {
    sort::recently_modified(entries, limit)
        .into_iter()
        .map(|entry| {
            json!({
                "title": entry.meta.title,
                "path": entry.path.route(),
                "created": entry.meta.created,
                "modified": entry.meta.modified,
            })
        })
        .collect()
}
