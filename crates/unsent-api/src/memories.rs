use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use tracing::{error, warn};
use uuid::Uuid;

use unsent_db::models::MemoryRow;
use unsent_types::api::{MemoryCard, SubmitMemoryRequest, SubmitMemoryResponse};
use unsent_types::models::{Color, Effect, Status};

use crate::AppStateInner;
use crate::error::ApiError;
use crate::style;

/// How many cards the public feed shows.
const RECENT_LIMIT: u32 = 3;

pub async fn submit_memory(
    State(state): State<Arc<AppStateInner>>,
    Json(req): Json<SubmitMemoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.recipient.is_empty() || req.message.is_empty() {
        return Err(ApiError::MissingRequiredFields);
    }

    let memory_id = Uuid::new_v4();
    // Blank sender means anonymous; store NULL instead of "".
    let sender = req.sender.filter(|s| !s.is_empty());

    // Run the blocking insert off the async runtime
    let db = state.clone();
    let id = memory_id.to_string();
    tokio::task::spawn_blocking(move || {
        db.db.insert_memory(
            &id,
            &req.recipient,
            &req.message,
            sender.as_deref(),
            req.color,
            req.full_bg,
            req.effect,
        )
    })
    .await
    .map_err(|e| ApiError::Store(anyhow::anyhow!("spawn_blocking join error: {}", e)))??;

    Ok((
        StatusCode::CREATED,
        Json(SubmitMemoryResponse {
            id: memory_id,
            status: Status::Pending,
        }),
    ))
}

/// The three newest approved memories, rendered as styled cards. A store
/// failure is logged and served as an empty feed — callers cannot tell
/// the two apart.
pub async fn recent_memories(State(state): State<Arc<AppStateInner>>) -> impl IntoResponse {
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.recent_approved(RECENT_LIMIT))
        .await
        .unwrap_or_else(|e| Err(anyhow::anyhow!("spawn_blocking join error: {}", e)));

    let cards: Vec<MemoryCard> = match rows {
        Ok(rows) => rows.into_iter().map(card_from_row).collect(),
        Err(e) => {
            error!("Error fetching recent memories: {:#}", e);
            Vec::new()
        }
    };

    Json(cards)
}

pub async fn get_memory(
    State(state): State<Arc<AppStateInner>>,
    Path(memory_id): Path<Uuid>,
) -> Result<Json<MemoryCard>, ApiError> {
    let db = state.clone();
    let id = memory_id.to_string();
    let row = tokio::task::spawn_blocking(move || db.db.get_approved_memory(&id))
        .await
        .map_err(|e| ApiError::Store(anyhow::anyhow!("spawn_blocking join error: {}", e)))??
        .ok_or(ApiError::NotFound)?;

    Ok(Json(card_from_row(row)))
}

fn card_from_row(row: MemoryRow) -> MemoryCard {
    let color = Color::from_keyword(&row.color);

    MemoryCard {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt memory id '{}': {}", row.id, e);
            Uuid::default()
        }),
        recipient: row.recipient,
        message: row.message,
        sender: row.sender,
        status: Status::from_keyword(&row.status),
        color,
        full_bg: row.full_bg,
        effect: Effect::from_keyword(&row.effect),
        created_at: parse_store_timestamp(&row.created_at).unwrap_or_else(|| {
            warn!("Corrupt created_at '{}' on memory '{}'", row.created_at, row.id);
            DateTime::default()
        }),
        border_class: style::border_class(color),
        background_class: style::card_background(color, row.full_bg),
    }
}

/// SQLite's datetime('now') produces "YYYY-MM-DD HH:MM:SS" with no
/// timezone; rows written by other tools may carry a full RFC 3339
/// stamp instead. Accept both, as UTC.
fn parse_store_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>().ok().or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .map(|ndt| ndt.and_utc())
            .ok()
    })
}
