use crate::Database;
use crate::models::MemoryRow;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use unsent_types::models::{Color, Effect, Status};

impl Database {
    /// Every submission lands as `pending`; nothing on the write path can
    /// make a memory publicly visible.
    #[allow(clippy::too_many_arguments)]
    pub fn insert_memory(
        &self,
        id: &str,
        recipient: &str,
        message: &str,
        sender: Option<&str>,
        color: Color,
        full_bg: bool,
        effect: Effect,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO memories (id, recipient, message, sender, status, color, full_bg, effect)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    id,
                    recipient,
                    message,
                    sender,
                    Status::Pending.as_str(),
                    color.as_str(),
                    full_bg,
                    effect.as_str(),
                ],
            )?;
            Ok(())
        })
    }

    pub fn recent_approved(&self, limit: u32) -> Result<Vec<MemoryRow>> {
        self.with_conn(|conn| query_recent_approved(conn, limit))
    }

    pub fn get_approved_memory(&self, id: &str) -> Result<Option<MemoryRow>> {
        self.with_conn(|conn| query_approved_memory(conn, id))
    }

    /// Moderation hook. Runs against the store directly — the server never
    /// calls this on behalf of a visitor. Returns whether a row changed.
    pub fn set_status(&self, id: &str, status: Status) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE memories SET status = ?1 WHERE id = ?2",
                rusqlite::params![status.as_str(), id],
            )?;
            Ok(changed > 0)
        })
    }
}

fn query_recent_approved(conn: &Connection, limit: u32) -> Result<Vec<MemoryRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, recipient, message, sender, status, color, full_bg, effect, created_at
         FROM memories
         WHERE status = 'approved'
         ORDER BY created_at DESC
         LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], row_to_memory)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_approved_memory(conn: &Connection, id: &str) -> Result<Option<MemoryRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, recipient, message, sender, status, color, full_bg, effect, created_at
         FROM memories
         WHERE id = ?1 AND status = 'approved'",
    )?;

    let row = stmt.query_row([id], row_to_memory).optional()?;
    Ok(row)
}

fn row_to_memory(row: &rusqlite::Row<'_>) -> rusqlite::Result<MemoryRow> {
    Ok(MemoryRow {
        id: row.get(0)?,
        recipient: row.get(1)?,
        message: row.get(2)?,
        sender: row.get(3)?,
        status: row.get(4)?,
        color: row.get(5)?,
        full_bg: row.get(6)?,
        effect: row.get(7)?,
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn open_test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("memories.db")).unwrap();
        (db, dir)
    }

    fn insert(db: &Database, recipient: &str, message: &str) -> String {
        let id = Uuid::new_v4().to_string();
        db.insert_memory(&id, recipient, message, None, Color::Default, false, Effect::None)
            .unwrap();
        id
    }

    fn backdate(db: &Database, id: &str, stamp: &str) {
        db.with_conn(|conn| {
            conn.execute(
                "UPDATE memories SET created_at = ?1 WHERE id = ?2",
                rusqlite::params![stamp, id],
            )?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn pending_memories_are_invisible() {
        let (db, _dir) = open_test_db();
        let id = insert(&db, "Alex", "I miss you");

        assert!(db.recent_approved(3).unwrap().is_empty());
        assert!(db.get_approved_memory(&id).unwrap().is_none());
    }

    #[test]
    fn approval_round_trip_preserves_fields() {
        let (db, _dir) = open_test_db();
        let id = Uuid::new_v4().to_string();
        db.insert_memory(&id, "Alex", "I miss you", None, Color::Navy, true, Effect::None)
            .unwrap();

        assert!(db.set_status(&id, Status::Approved).unwrap());

        let rows = db.recent_approved(3).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, id);
        assert_eq!(row.recipient, "Alex");
        assert_eq!(row.message, "I miss you");
        assert_eq!(row.sender, None);
        assert_eq!(row.status, "approved");
        assert_eq!(row.color, "navy");
        assert!(row.full_bg);
        assert_eq!(row.effect, "none");
        assert!(!row.created_at.is_empty());
    }

    #[test]
    fn recent_approved_orders_newest_first_and_limits() {
        let (db, _dir) = open_test_db();

        // Stagger created_at explicitly; datetime('now') only has second
        // resolution and all five inserts land within it.
        for (i, stamp) in [
            "2026-08-01 10:00:00",
            "2026-08-02 10:00:00",
            "2026-08-03 10:00:00",
            "2026-08-04 10:00:00",
            "2026-08-05 10:00:00",
        ]
        .into_iter()
        .enumerate()
        {
            let id = insert(&db, &format!("Recipient {i}"), "hello");
            db.set_status(&id, Status::Approved).unwrap();
            backdate(&db, &id, stamp);
        }

        let rows = db.recent_approved(3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].recipient, "Recipient 4");
        assert_eq!(rows[1].recipient, "Recipient 3");
        assert_eq!(rows[2].recipient, "Recipient 2");
    }

    #[test]
    fn approved_mixed_with_pending_filters() {
        let (db, _dir) = open_test_db();

        let approved = insert(&db, "A", "approved one");
        db.set_status(&approved, Status::Approved).unwrap();
        insert(&db, "B", "still pending");

        let rows = db.recent_approved(3).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, approved);

        assert!(db.get_approved_memory(&approved).unwrap().is_some());
    }

    #[test]
    fn set_status_reports_missing_rows() {
        let (db, _dir) = open_test_db();
        assert!(!db.set_status("no-such-id", Status::Approved).unwrap());
    }

    #[test]
    fn sender_and_effect_are_stored() {
        let (db, _dir) = open_test_db();
        let id = Uuid::new_v4().to_string();
        db.insert_memory(&id, "Sam", "until next time", Some("Jo"), Color::Teal, false, Effect::Handwritten)
            .unwrap();
        db.set_status(&id, Status::Approved).unwrap();

        let row = db.get_approved_memory(&id).unwrap().unwrap();
        assert_eq!(row.sender.as_deref(), Some("Jo"));
        assert_eq!(row.color, "teal");
        assert_eq!(row.effect, "handwritten");
    }
}
