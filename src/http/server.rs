//! # HTTP Server
//!
//! Axum surface the browser table talks to. Exposes the store contract
//! plus the CSV download; write endpoints are gated by the configured
//! write-access flag.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::observability::{Event, Logger};
use crate::schema::{RecordDraft, RecordId};
use crate::store::{RuleStore, EXPORT_FILENAME, EXPORT_MIME};

use super::errors::{HttpError, HttpResult};
use super::response::{DeleteResponse, ListResponse, OptionsResponse, RecordResponse};

/// Shared per-request state
pub struct AppState<S: RuleStore> {
    store: S,
    write_access: bool,
}

/// Shared state type
type ServerState<S> = Arc<AppState<S>>;

/// The JSON surface over an injected store
pub struct ApiServer<S: RuleStore> {
    state: ServerState<S>,
}

impl<S: RuleStore + 'static> ApiServer<S> {
    pub fn new(store: S, write_access: bool) -> Self {
        Self {
            state: Arc::new(AppState {
                store,
                write_access,
            }),
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/api/v1/rules",
                get(list_rules::<S>).post(insert_rule::<S>),
            )
            .route(
                "/api/v1/rules/{id}",
                put(update_rule::<S>).delete(delete_rule::<S>),
            )
            .route(
                "/api/v1/rules/fields/{field}/options",
                get(field_options::<S>),
            )
            .route("/api/v1/rules/export", get(export_rules::<S>))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Bind and serve until the listener closes
    pub async fn serve(self, addr: SocketAddr) -> io::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        Logger::info(Event::ServerStart, &[("addr", &addr.to_string())]);
        let result = axum::serve(listener, self.router()).await;
        Logger::info(Event::ServerStop, &[]);
        result
    }
}

fn ensure_write<S: RuleStore>(state: &AppState<S>, action: &'static str) -> HttpResult<()> {
    if state.write_access {
        return Ok(());
    }
    Logger::warn(Event::WriteAccessDenied, &[("action", action)]);
    Err(HttpError::WriteDenied)
}

/// List all records
async fn list_rules<S: RuleStore>(
    State(state): State<ServerState<S>>,
) -> HttpResult<Json<ListResponse>> {
    let records = state.store.list().await?;
    Ok(Json(ListResponse::new(records)))
}

/// Insert a record (write-gated)
async fn insert_rule<S: RuleStore>(
    State(state): State<ServerState<S>>,
    Json(draft): Json<RecordDraft>,
) -> HttpResult<(StatusCode, Json<RecordResponse>)> {
    ensure_write(&state, "add")?;
    let record = state.store.insert(draft).await?;
    Logger::info(Event::RecordInserted, &[("id", &record.id().to_string())]);
    Ok((StatusCode::CREATED, Json(RecordResponse::new(record))))
}

/// Replace a record's fields (write-gated)
async fn update_rule<S: RuleStore>(
    State(state): State<ServerState<S>>,
    Path(id): Path<RecordId>,
    Json(draft): Json<RecordDraft>,
) -> HttpResult<Json<RecordResponse>> {
    ensure_write(&state, "edit")?;
    let record = state.store.update(id, draft).await?;
    Logger::info(Event::RecordUpdated, &[("id", &id.to_string())]);
    Ok(Json(RecordResponse::new(record)))
}

/// Delete a record (write-gated)
async fn delete_rule<S: RuleStore>(
    State(state): State<ServerState<S>>,
    Path(id): Path<RecordId>,
) -> HttpResult<Json<DeleteResponse>> {
    ensure_write(&state, "delete")?;
    let id = state.store.delete(id).await?;
    Logger::info(Event::RecordDeleted, &[("id", &id.to_string())]);
    Ok(Json(DeleteResponse::new(id)))
}

/// Distinct values observed for one schema field
async fn field_options<S: RuleStore>(
    State(state): State<ServerState<S>>,
    Path(field): Path<String>,
) -> HttpResult<Json<OptionsResponse>> {
    let options = state.store.distinct_values(&field).await?;
    Ok(Json(OptionsResponse::new(field, options)))
}

/// CSV download with attachment headers
async fn export_rules<S: RuleStore>(State(state): State<ServerState<S>>) -> HttpResult<Response> {
    Logger::info(Event::ExportStart, &[]);
    let csv = state.store.export_csv().await?;
    Logger::info(Event::ExportComplete, &[("bytes", &csv.len().to_string())]);

    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
