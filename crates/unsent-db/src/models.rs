/// Database row types — these map directly to SQLite rows and stay
/// stringly typed so the store layer is independent of the API models.

pub struct MemoryRow {
    pub id: String,
    pub recipient: String,
    pub message: String,
    pub sender: Option<String>,
    pub status: String,
    pub color: String,
    pub full_bg: bool,
    pub effect: String,
    pub created_at: String,
}
