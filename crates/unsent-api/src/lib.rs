pub mod error;
pub mod memories;
pub mod quotes;
pub mod style;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use unsent_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/memories", post(memories::submit_memory))
        .route("/memories/recent", get(memories::recent_memories))
        .route("/memories/{memory_id}", get(memories::get_memory))
        .route("/quotes", get(quotes::get_quotes))
        .with_state(state)
}
