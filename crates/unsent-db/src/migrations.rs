use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS memories (
            id          TEXT PRIMARY KEY,
            recipient   TEXT NOT NULL,
            message     TEXT NOT NULL,
            sender      TEXT,
            status      TEXT NOT NULL DEFAULT 'pending',
            color       TEXT NOT NULL DEFAULT 'default',
            full_bg     INTEGER NOT NULL DEFAULT 0,
            effect      TEXT NOT NULL DEFAULT 'none',
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Every public read filters on status and sorts by recency
        CREATE INDEX IF NOT EXISTS idx_memories_status_created
            ON memories(status, created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
